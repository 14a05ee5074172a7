//! Plain-text rendering of cards and the challenge view.

use std::io::{self, Write};

use kcalburn_core::{ActivityCard, ChallengePhase, ChallengeView};

const BAR_WIDTH: usize = 20;

pub fn cards<W: Write>(
    out: &mut W,
    summary: &str,
    cards: &[ActivityCard],
    show_intensity: bool,
) -> io::Result<()> {
    writeln!(out, "{summary}")?;
    for (i, card) in cards.iter().enumerate() {
        write!(
            out,
            "{:>2}. {} {:<22} {}",
            i + 1,
            card.icon,
            card.label,
            card.duration_label
        )?;
        if show_intensity {
            write!(out, "  ({})", card.intensity_label)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn challenge_header<W: Write>(out: &mut W, view: &ChallengeView) -> io::Result<()> {
    writeln!(out, "{} {}", view.icon, view.title)?;
    writeln!(out, "{}", view.subtitle)?;
    writeln!(out, "{}", view.target_text)?;
    if view.phase == ChallengePhase::Ready {
        writeln!(out, "Ready? [s] Start  [q] Close")?;
    }
    Ok(())
}

pub fn progress_bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn challenge_status<W: Write>(out: &mut W, view: &ChallengeView) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {:>3.0}%  [p] {}  [x] Stop",
        view.clock,
        progress_bar(view.progress_pct),
        view.progress_pct,
        view.pause_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(250.0), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn cards_are_numbered() {
        let card = ActivityCard {
            key: "run".into(),
            icon: "R".into(),
            label: "Running".into(),
            duration_label: "approx. 41 minutes".into(),
            intensity_label: "METs: 7.0".into(),
            target_seconds: 2449,
        };
        let mut out = Vec::new();
        cards(&mut out, "Summary.", &[card], true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Summary.\n"));
        assert!(text.contains(" 1. R Running"));
        assert!(text.contains("approx. 41 minutes"));
        assert!(text.contains("(METs: 7.0)"));
    }
}
