//! Interactive session: lightweight state and a tiny command parser.
//!
//! This module drives the `interactive` subcommand and backs the one-shot
//! subcommands in `main`. The [`App`] owns the loaded config, the resolved
//! theme and the most recent reading; `share`, `json`, `copy`, `save` and
//! `last` all act on that reading. A failed cast reports the validation
//! message and leaves the previous reading in place.
//!
//! The [`CardCommandParser`] recognizes bare keywords (`cast`, `goal`,
//! `again`, `share`, ...) on an interactive prompt and returns a
//! [`CardCommand`] enum for the app to handle. Arguments after the command
//! are intentionally minimal: whitespace-separated, with the goal text and
//! the save filename soaking up the rest of the line.

use log::trace;
use rand::Rng;
use std::io::Write;
use std::path::Path;

use crate::card::{self, RenderOptions};
use crate::config::Config;
use crate::export;
use crate::fortune::{
    cast, FortuneError, FortuneRequest, FortuneResult, RequestDetail, TARGET_YEAR,
};
use crate::theme::{self, Theme};

/// Sample profiles offered by the `demo` command.
pub const DEMO_PROFILES: [(&str, &str, &str, &str); 3] = [
    ("김준휘", "1999-11-02", "175", "68.5"),
    ("홍길동", "2001-03-14", "172", "70.2"),
    ("이서연", "1998-07-09", "162", "54.0"),
];

const HELP_TEXT: &str = "Commands:\n  cast <name> <birth> <height> <weight>   body reading (birth is YYYY-MM-DD)\n  goal <name> <birth> <goal...>           goal reading\n  again   run the reading form again\n  demo    cast a random sample profile\n  last    show the latest card again\n  share   print the share blurb for the latest card\n  json    print the share payload as JSON\n  copy    print the plain-text card for pasting\n  save [file]   write the latest card (default: under the data directory)\n  theme   toggle dark/light and remember it\n  debug   toggle the seed footer\n  help    this list\n  quit    leave";

const NO_READING: &str = "No reading yet. Cast one first.";

pub struct App {
    config: Config,
    theme: Theme,
    debug: bool,
    last: Option<FortuneResult>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = theme::resolve(&config.storage.data_dir, &config);
        Self {
            config,
            theme,
            debug: false,
            last: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn last(&self) -> Option<&FortuneResult> {
        self.last.as_ref()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            theme: self.theme,
            color: card::color_enabled(self.config.ui.use_color),
            debug: self.debug,
        }
    }

    /// Cast a body reading and remember it as the latest. Validation errors
    /// leave the previous reading untouched.
    pub fn cast_body(
        &mut self,
        name: &str,
        birth: &str,
        height: &str,
        weight: &str,
    ) -> Result<FortuneResult, FortuneError> {
        let result = cast(&FortuneRequest {
            name: name.to_string(),
            birth: birth.to_string(),
            detail: RequestDetail::Body {
                height: height.to_string(),
                weight: weight.to_string(),
            },
        })?;
        log::debug!(
            "cast body reading for '{}', seed={}",
            crate::logutil::escape_log(name),
            result.seed
        );
        self.last = Some(result.clone());
        Ok(result)
    }

    /// Cast a goal reading and remember it as the latest.
    pub fn cast_goal(
        &mut self,
        name: &str,
        birth: &str,
        goal: &str,
    ) -> Result<FortuneResult, FortuneError> {
        let result = cast(&FortuneRequest {
            name: name.to_string(),
            birth: birth.to_string(),
            detail: RequestDetail::Goal {
                goal: goal.to_string(),
            },
        })?;
        log::debug!(
            "cast goal reading '{}', seed={}",
            crate::logutil::escape_log(goal),
            result.seed
        );
        self.last = Some(result.clone());
        Ok(result)
    }

    /// Flip and persist the theme; returns the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = theme::toggle(&self.config.storage.data_dir, &self.config);
        self.theme
    }

    fn render_last(&self, render: impl FnOnce(&FortuneResult) -> String) -> String {
        match &self.last {
            Some(result) => render(result),
            None => NO_READING.to_string(),
        }
    }

    /// Handle one parsed command. `None` means the session should end.
    pub fn dispatch(&mut self, command: CardCommand) -> Option<String> {
        match command {
            CardCommand::Cast {
                name,
                birth,
                height,
                weight,
            } => Some(match self.cast_body(&name, &birth, &height, &weight) {
                Ok(result) => card::render(&result, &self.render_options()),
                Err(e) => e.to_string(),
            }),
            CardCommand::Goal { name, birth, goal } => {
                Some(match self.cast_goal(&name, &birth, &goal) {
                    Ok(result) => card::render(&result, &self.render_options()),
                    Err(e) => e.to_string(),
                })
            }
            CardCommand::Demo => {
                let mut rng = rand::thread_rng();
                let idx = rng.gen_range(0..DEMO_PROFILES.len());
                let (name, birth, height, weight) = DEMO_PROFILES[idx];
                Some(match self.cast_body(name, birth, height, weight) {
                    Ok(result) => card::render(&result, &self.render_options()),
                    Err(e) => e.to_string(),
                })
            }
            CardCommand::Last => {
                let opts = self.render_options();
                Some(self.render_last(|result| card::render(result, &opts)))
            }
            CardCommand::Share => Some(self.render_last(export::share_text)),
            CardCommand::Json => Some(self.render_last(|result| {
                match export::share_json(result) {
                    Ok(json) => json,
                    Err(e) => e.to_string(),
                }
            })),
            CardCommand::Copy => Some(self.render_last(export::full_text)),
            CardCommand::Save { file } => Some(match &self.last {
                Some(result) => {
                    let target = file.as_deref().map(Path::new);
                    match export::save_card(result, target, &self.config.storage.data_dir) {
                        Ok(path) => format!("Saved card to {}", path.display()),
                        Err(e) => e.to_string(),
                    }
                }
                None => NO_READING.to_string(),
            }),
            CardCommand::Theme => {
                let theme = self.toggle_theme();
                Some(format!("Theme is now {}.", theme))
            }
            CardCommand::Debug => {
                self.debug = !self.debug;
                Some(if self.debug {
                    "Seed footer on.".to_string()
                } else {
                    "Seed footer off.".to_string()
                })
            }
            // `again` reruns the reading form; outside the prompt loop the
            // closest thing is the one-line cast/goal commands.
            CardCommand::Again => {
                Some("Start a new reading with cast or goal.".to_string())
            }
            CardCommand::Help => Some(HELP_TEXT.to_string()),
            CardCommand::Quit => None,
            CardCommand::Unknown => {
                Some("Unknown command. Type 'help' for the list.".to_string())
            }
            CardCommand::Invalid(msg) => Some(msg),
        }
    }

    /// One pass through the reading form. Returns `false` on EOF. A
    /// validation failure prints the message and keeps the previous reading.
    fn prompt_reading(
        &mut self,
        stdin: &std::io::Stdin,
        stdout: &mut std::io::Stdout,
    ) -> anyhow::Result<bool> {
        let Some(kind) = prompt_line(stdin, stdout, "Reading type [body/goal] (body): ")? else {
            return Ok(false);
        };
        let kind = kind.trim().to_ascii_lowercase();
        let wants_goal = kind == "goal" || kind == "g";

        let Some(name) = prompt_line(stdin, stdout, "Name: ")? else {
            return Ok(false);
        };
        let Some(birth) = prompt_line(stdin, stdout, "Birth (YYYY-MM-DD): ")? else {
            return Ok(false);
        };

        let outcome = if wants_goal {
            let prompt = format!("Goal for {}: ", TARGET_YEAR);
            let Some(goal) = prompt_line(stdin, stdout, &prompt)? else {
                return Ok(false);
            };
            self.cast_goal(&name, &birth, &goal)
        } else {
            let Some(height) = prompt_line(stdin, stdout, "Height (cm): ")? else {
                return Ok(false);
            };
            let Some(weight) = prompt_line(stdin, stdout, "Weight (kg): ")? else {
                return Ok(false);
            };
            self.cast_body(&name, &birth, &height, &weight)
        };

        match outcome {
            Ok(result) => writeln!(stdout, "{}", card::render(&result, &self.render_options()))?,
            Err(e) => writeln!(stdout, "{}", e)?,
        }
        Ok(true)
    }

    /// Blocking interactive session over stdin: the reading form once, then
    /// a command loop. Ends on `quit` or EOF.
    pub fn run_interactive(&mut self) -> anyhow::Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        writeln!(
            stdout,
            "fortunecast interactive — theme {}, type 'help' for commands",
            self.theme
        )?;

        if !self.prompt_reading(&stdin, &mut stdout)? {
            return Ok(());
        }

        let parser = CardCommandParser::new();
        let mut line = String::new();
        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;
            line.clear();
            if stdin.read_line(&mut line)? == 0 {
                break; // EOF
            }
            let command = parser.parse(&line);
            if command == CardCommand::Again {
                if !self.prompt_reading(&stdin, &mut stdout)? {
                    break;
                }
                continue;
            }
            match self.dispatch(command) {
                Some(reply) => writeln!(stdout, "{}", reply)?,
                None => break,
            }
        }
        Ok(())
    }
}

/// Read one form answer; the line terminator is stripped, nothing else.
/// `None` means EOF.
fn prompt_line(
    stdin: &std::io::Stdin,
    stdout: &mut std::io::Stdout,
    prompt: &str,
) -> anyhow::Result<Option<String>> {
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Minimal interactive command parser
pub struct CardCommandParser;

impl CardCommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str) -> CardCommand {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let Some(&keyword) = tokens.first() else {
            return CardCommand::Unknown;
        };

        if keyword.eq_ignore_ascii_case("cast") {
            if tokens.len() != 5 {
                return CardCommand::Invalid(
                    "usage: cast <name> <birth> <height> <weight>".into(),
                );
            }
            trace!("Parsed cast from '{}'", raw.trim());
            return CardCommand::Cast {
                name: tokens[1].to_string(),
                birth: tokens[2].to_string(),
                height: tokens[3].to_string(),
                weight: tokens[4].to_string(),
            };
        }
        if keyword.eq_ignore_ascii_case("goal") {
            if tokens.len() < 4 {
                return CardCommand::Invalid("usage: goal <name> <birth> <goal>".into());
            }
            trace!("Parsed goal from '{}'", raw.trim());
            return CardCommand::Goal {
                name: tokens[1].to_string(),
                birth: tokens[2].to_string(),
                goal: tokens[3..].join(" "),
            };
        }
        if keyword.eq_ignore_ascii_case("save") {
            let rest = tokens[1..].join(" ");
            return CardCommand::Save {
                file: if rest.is_empty() { None } else { Some(rest) },
            };
        }
        if keyword.eq_ignore_ascii_case("again") {
            return CardCommand::Again;
        }
        if keyword.eq_ignore_ascii_case("demo") {
            return CardCommand::Demo;
        }
        if keyword.eq_ignore_ascii_case("last") {
            return CardCommand::Last;
        }
        if keyword.eq_ignore_ascii_case("share") {
            return CardCommand::Share;
        }
        if keyword.eq_ignore_ascii_case("json") {
            return CardCommand::Json;
        }
        if keyword.eq_ignore_ascii_case("copy") {
            return CardCommand::Copy;
        }
        if keyword.eq_ignore_ascii_case("theme") {
            return CardCommand::Theme;
        }
        if keyword.eq_ignore_ascii_case("debug") {
            return CardCommand::Debug;
        }
        if keyword.eq_ignore_ascii_case("help") || keyword == "?" {
            return CardCommand::Help;
        }
        if keyword.eq_ignore_ascii_case("quit") || keyword.eq_ignore_ascii_case("exit") {
            return CardCommand::Quit;
        }
        CardCommand::Unknown
    }
}

impl Default for CardCommandParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CardCommand {
    Cast {
        name: String,
        birth: String,
        height: String,
        weight: String,
    },
    Goal {
        name: String,
        birth: String,
        goal: String,
    },
    Again,
    Demo,
    Last,
    Share,
    Json,
    Copy,
    Save {
        file: Option<String>,
    },
    Theme,
    Debug,
    Help,
    Quit,
    Unknown,
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_app() -> (tempfile::TempDir, App) {
        let tmp = tempdir().unwrap();
        let mut config = Config::default();
        config.storage.data_dir = tmp.path().to_string_lossy().to_string();
        (tmp, App::new(config))
    }

    #[test]
    fn parses_cast_with_exact_arity() {
        let parser = CardCommandParser::new();
        match parser.parse("cast Kim 1999-11-02 175 68.5") {
            CardCommand::Cast {
                name,
                birth,
                height,
                weight,
            } => {
                assert_eq!(name, "Kim");
                assert_eq!(birth, "1999-11-02");
                assert_eq!(height, "175");
                assert_eq!(weight, "68.5");
            }
            other => panic!("expected Cast, got {:?}", other),
        }
        assert!(matches!(
            parser.parse("cast Kim 1999-11-02 175"),
            CardCommand::Invalid(_)
        ));
        assert!(matches!(
            parser.parse("CAST Kim 1999-11-02 175 68.5"),
            CardCommand::Cast { .. }
        ));
    }

    #[test]
    fn goal_soaks_up_the_rest_of_the_line() {
        let parser = CardCommandParser::new();
        match parser.parse("goal Kim 1999-11-02 run a marathon") {
            CardCommand::Goal { goal, .. } => assert_eq!(goal, "run a marathon"),
            other => panic!("expected Goal, got {:?}", other),
        }
        assert!(matches!(
            parser.parse("goal Kim 1999-11-02"),
            CardCommand::Invalid(_)
        ));
    }

    #[test]
    fn save_takes_an_optional_filename() {
        let parser = CardCommandParser::new();
        assert_eq!(parser.parse("save"), CardCommand::Save { file: None });
        assert_eq!(
            parser.parse("save out.txt"),
            CardCommand::Save {
                file: Some("out.txt".to_string())
            }
        );
        assert_eq!(
            parser.parse("save my card.txt"),
            CardCommand::Save {
                file: Some("my card.txt".to_string())
            }
        );
    }

    #[test]
    fn keyword_commands_parse() {
        let parser = CardCommandParser::new();
        assert_eq!(parser.parse("demo"), CardCommand::Demo);
        assert_eq!(parser.parse("again"), CardCommand::Again);
        assert_eq!(parser.parse("json"), CardCommand::Json);
        assert_eq!(parser.parse("copy"), CardCommand::Copy);
        assert_eq!(parser.parse("  theme  "), CardCommand::Theme);
        assert_eq!(parser.parse("?"), CardCommand::Help);
        assert_eq!(parser.parse("HELP"), CardCommand::Help);
        assert_eq!(parser.parse("quit"), CardCommand::Quit);
        assert_eq!(parser.parse("exit"), CardCommand::Quit);
        assert_eq!(parser.parse(""), CardCommand::Unknown);
        assert_eq!(parser.parse("frobnicate"), CardCommand::Unknown);
    }

    #[test]
    fn share_without_a_reading_explains_itself() {
        let (_tmp, mut app) = test_app();
        for command in [
            CardCommand::Share,
            CardCommand::Json,
            CardCommand::Copy,
            CardCommand::Last,
            CardCommand::Save { file: None },
        ] {
            let reply = app.dispatch(command).unwrap();
            assert!(reply.contains("No reading yet"), "got {:?}", reply);
        }
    }

    #[test]
    fn cast_then_share_uses_the_latest_reading() {
        let (_tmp, mut app) = test_app();
        let parser = CardCommandParser::new();
        let card = app
            .dispatch(parser.parse("cast Kim 1999-11-02 175 68.5"))
            .unwrap();
        assert!(card.contains("Kim"));
        assert!(app.last().is_some());

        let share = app.dispatch(CardCommand::Share).unwrap();
        assert!(share.starts_with("Kim's"));
    }

    #[test]
    fn json_and_copy_act_on_the_latest_reading() {
        let (_tmp, mut app) = test_app();
        app.cast_body("Kim", "1999-11-02", "175", "68.5").unwrap();

        let json = app.dispatch(CardCommand::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Kim");

        let copy = app.dispatch(CardCommand::Copy).unwrap();
        assert!(copy.contains("fortune for Kim"));
        assert!(!copy.contains('\x1b'));
    }

    #[test]
    fn save_with_a_filename_writes_exactly_there() {
        let (tmp, mut app) = test_app();
        app.cast_body("Kim", "1999-11-02", "175", "68.5").unwrap();

        let target = tmp.path().join("my-card.txt");
        let reply = app
            .dispatch(CardCommand::Save {
                file: Some(target.to_string_lossy().to_string()),
            })
            .unwrap();
        assert!(reply.contains("Saved card"));
        assert!(target.exists());
    }

    #[test]
    fn failed_cast_keeps_the_previous_reading() {
        let (_tmp, mut app) = test_app();
        app.cast_body("Kim", "1999-11-02", "175", "68.5").unwrap();

        let reply = app
            .dispatch(CardCommandParser::new().parse("cast Lee bad-date 170 60"))
            .unwrap();
        assert!(reply.contains("YYYY-MM-DD"));
        assert_eq!(app.last().map(|r| r.name.as_str()), Some("Kim"));
    }

    #[test]
    fn demo_casts_a_sample_profile() {
        let (_tmp, mut app) = test_app();
        let out = app.dispatch(CardCommand::Demo).unwrap();
        assert!(
            DEMO_PROFILES.iter().any(|(name, _, _, _)| out.contains(name)),
            "demo output names no sample profile"
        );
        assert!(app.last().is_some());
    }

    #[test]
    fn debug_toggle_controls_the_seed_footer() {
        let (_tmp, mut app) = test_app();
        app.dispatch(CardCommand::Debug).unwrap();
        let with_seed = app
            .dispatch(CardCommandParser::new().parse("cast Kim 1999-11-02 175 68.5"))
            .unwrap();
        assert!(with_seed.contains("seed="));

        app.dispatch(CardCommand::Debug).unwrap();
        let without = app.dispatch(CardCommand::Last).unwrap();
        assert!(!without.contains("seed="));
    }

    #[test]
    fn theme_toggle_persists_across_apps() {
        let (tmp, mut app) = test_app();
        let first = app.theme();
        let flipped = app.toggle_theme();
        assert_eq!(flipped, first.toggled());

        let mut config = Config::default();
        config.storage.data_dir = tmp.path().to_string_lossy().to_string();
        let fresh = App::new(config);
        assert_eq!(fresh.theme(), flipped);
    }

    #[test]
    fn quit_ends_the_session() {
        let (_tmp, mut app) = test_app();
        assert!(app.dispatch(CardCommand::Quit).is_none());
    }
}
