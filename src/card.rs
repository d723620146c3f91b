//! Terminal rendering of a reading as a "card".
//!
//! The renderer is a pure function from a [`FortuneResult`] plus options to a
//! `String`; it never touches the terminal itself. Color uses plain 16-color
//! ANSI escapes so the card survives basically every terminal; callers decide
//! whether color is appropriate via [`color_enabled`].

use crate::fortune::{FortuneResult, TARGET_YEAR};
use crate::theme::Theme;

/// Rendering switches, resolved by the caller from config, TTY state and CLI
/// flags.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub theme: Theme,
    pub color: bool,
    /// Append the seed line used to reproduce the reading.
    pub debug: bool,
}

struct Palette {
    border: &'static str,
    title: &'static str,
    label: &'static str,
    accent: &'static str,
    bar: &'static str,
    muted: &'static str,
    reset: &'static str,
}

const PLAIN: Palette = Palette {
    border: "",
    title: "",
    label: "",
    accent: "",
    bar: "",
    muted: "",
    reset: "",
};

const DARK: Palette = Palette {
    border: "\x1b[90m",
    title: "\x1b[1;96m",
    label: "\x1b[36m",
    accent: "\x1b[95m",
    bar: "\x1b[92m",
    muted: "\x1b[90m",
    reset: "\x1b[0m",
};

// Light terminals need the darker end of the 16-color table to stay legible.
const LIGHT: Palette = Palette {
    border: "\x1b[34m",
    title: "\x1b[1;34m",
    label: "\x1b[35m",
    accent: "\x1b[31m",
    bar: "\x1b[32m",
    muted: "\x1b[90m",
    reset: "\x1b[0m",
};

impl Palette {
    fn select(opts: &RenderOptions) -> &'static Palette {
        if !opts.color {
            return &PLAIN;
        }
        match opts.theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// Should ANSI color be emitted? The config switch, the `NO_COLOR` convention
/// and stdout being a real terminal all have to agree.
pub fn color_enabled(config_flag: bool) -> bool {
    config_flag && std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

const BAR_CELLS: usize = 10;

fn bar(score: u8) -> String {
    let filled = (usize::from(score) + 5) / 10;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

fn rule(p: &Palette) -> String {
    format!("{}{}{}", p.border, "─".repeat(46), p.reset)
}

fn score_line(p: &Palette, label: &str, score: u8) -> String {
    format!(
        "{}{:<8}{} {:>3}  {}{}{}",
        p.label,
        label,
        p.reset,
        score,
        p.bar,
        bar(score),
        p.reset
    )
}

/// Render the full card.
pub fn render(result: &FortuneResult, opts: &RenderOptions) -> String {
    let p = Palette::select(opts);
    let mut out = String::new();

    out.push_str(&format!(
        "{}✨ {} fortune for {} ✨{}\n",
        p.title, TARGET_YEAR, result.name, p.reset
    ));
    out.push_str(&rule(p));
    out.push('\n');

    let a = &result.attributes;
    let mut attr_line = format!(
        "{} · {} · Life path {}",
        a.zodiac.label(),
        a.animal,
        a.life_path
    );
    if let Some(bmi) = a.bmi {
        attr_line.push_str(&format!(" · BMI {}", bmi));
    }
    out.push_str(&format!("{}{}{}\n", p.muted, attr_line, p.reset));
    out.push('\n');

    out.push_str(&result.summary);
    out.push('\n');
    out.push('\n');

    out.push_str(&format!(
        "{}Keyword{} {}{}{} — {}\n",
        p.label, p.reset, p.accent, result.tone.key, p.reset, result.tone.desc
    ));
    out.push_str(&format!("{}Focus{}   {}\n", p.label, p.reset, result.focus));
    if let Some(outlook) = &result.outlook {
        out.push_str(&format!(
            "{}Goal{}    {} — {}{}%{} ({})\n",
            p.label,
            p.reset,
            outlook.goal,
            p.accent,
            outlook.percent,
            p.reset,
            outlook.tier.label()
        ));
    }
    out.push('\n');

    out.push_str(&score_line(p, "Work", result.scores.work));
    out.push('\n');
    out.push_str(&score_line(p, "Money", result.scores.money));
    out.push('\n');
    out.push_str(&score_line(p, "Love", result.scores.love));
    out.push('\n');
    out.push_str(&score_line(p, "Health", result.scores.health));
    out.push('\n');
    out.push_str(&format!(
        "{}Overall{}  {:>3}\n",
        p.label,
        p.reset,
        result.scores.overall()
    ));
    out.push('\n');

    out.push_str(&format!("{}Work{}   {}\n", p.label, p.reset, result.readings.work));
    out.push_str(&format!("{}Money{}  {}\n", p.label, p.reset, result.readings.money));
    out.push_str(&format!("{}Love{}   {}\n", p.label, p.reset, result.readings.love));
    out.push_str(&format!("{}Health{} {}\n", p.label, p.reset, result.readings.health));
    out.push('\n');
    out.push_str(&format!(
        "{}Advice{} {}\n",
        p.label, p.reset, result.advice
    ));

    if opts.debug {
        out.push_str(&rule(p));
        out.push('\n');
        out.push_str(&format!(
            "{}seed={} material={:?}{}\n",
            p.muted, result.seed, result.seed_material, p.reset
        ));
    }

    out
}

/// The card without ANSI, as written to files and share targets.
pub fn render_plain(result: &FortuneResult) -> String {
    render(
        result,
        &RenderOptions {
            theme: Theme::Dark,
            color: false,
            debug: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortune::{cast, FortuneRequest, RequestDetail};

    fn body_result() -> FortuneResult {
        cast(&FortuneRequest {
            name: "Kim".to_string(),
            birth: "1999-11-02".to_string(),
            detail: RequestDetail::Body {
                height: "175".to_string(),
                weight: "68.5".to_string(),
            },
        })
        .unwrap()
    }

    fn goal_result() -> FortuneResult {
        cast(&FortuneRequest {
            name: "Kim".to_string(),
            birth: "1999-11-02".to_string(),
            detail: RequestDetail::Goal {
                goal: "run a marathon".to_string(),
            },
        })
        .unwrap()
    }

    fn plain() -> RenderOptions {
        RenderOptions {
            theme: Theme::Dark,
            color: false,
            debug: false,
        }
    }

    #[test]
    fn plain_card_has_no_escapes() {
        let result = body_result();
        let card = render(&result, &plain());
        assert!(!card.contains('\x1b'));
        assert!(card.contains("fortune for Kim"));
        assert!(card.contains(&result.summary));
        assert!(card.contains("Work"));
        assert!(card.contains("Overall"));
        assert!(card.contains("Advice"));
        assert_eq!(card, render_plain(&result));
    }

    #[test]
    fn colored_card_opens_and_closes_escapes() {
        let opts = RenderOptions {
            color: true,
            ..plain()
        };
        let card = render(&body_result(), &opts);
        assert!(card.contains("\x1b[1;96m"));
        assert!(card.contains("\x1b[0m"));
    }

    #[test]
    fn light_theme_uses_its_own_palette() {
        let opts = RenderOptions {
            theme: Theme::Light,
            color: true,
            debug: false,
        };
        let card = render(&body_result(), &opts);
        assert!(card.contains("\x1b[1;34m"));
        assert!(!card.contains("\x1b[1;96m"));
    }

    #[test]
    fn body_card_shows_bmi_and_no_goal_line() {
        let card = render(&body_result(), &plain());
        assert!(card.contains("BMI 22.4"));
        assert!(!card.contains("Goal"));
    }

    #[test]
    fn goal_card_shows_outlook() {
        let card = render(&goal_result(), &plain());
        assert!(card.contains("Goal"));
        assert!(card.contains('%'));
        assert!(!card.contains("BMI"));
    }

    #[test]
    fn debug_footer_reveals_the_seed() {
        let result = body_result();
        let opts = RenderOptions {
            debug: true,
            ..plain()
        };
        let card = render(&result, &opts);
        assert!(card.contains(&format!("seed={}", result.seed)));
        assert!(card.contains("material="));

        let silent = render(&result, &plain());
        assert!(!silent.contains("seed="));
    }

    #[test]
    fn bars_track_the_score() {
        assert_eq!(bar(0), "░░░░░░░░░░");
        assert_eq!(bar(100), "██████████");
        assert_eq!(bar(54), "█████░░░░░");
        assert_eq!(bar(55), "██████░░░░");
    }
}
