//! text-field-play - drive a text field from the command line.
//!
//! Runs a list of interaction steps against a freshly rendered field and
//! prints the final rendering plus every handler invocation as JSON.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use text_field::{Config, I18n, Key, TextFieldProps};
use text_field_dom::{fire_event, Document, MockFn, UserEvent};

#[derive(Parser)]
#[command(name = "text-field-play")]
#[command(about = "Render a text field and replay interaction steps against it")]
#[command(version)]
struct Cli {
    /// Placeholder override
    #[arg(long)]
    placeholder: Option<String>,

    /// Name of the expected value, used for the placeholder when
    /// --placeholder is not given
    #[arg(long)]
    field_name: Option<String>,

    /// Extra class tokens
    #[arg(long = "class")]
    class_name: Option<String>,

    /// Initial controlled value
    #[arg(long)]
    value: Option<String>,

    /// Render the field disabled
    #[arg(long)]
    disabled: bool,

    /// Config file (defaults to TEXT_FIELD_CONFIG or the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Locale override, e.g. "en"
    #[arg(long)]
    locale: Option<String>,

    /// Steps: focus, blur, enter, compositionstart, compositionend,
    /// type=<keys>, change=<text>, compose=<text>
    steps: Vec<Step>,
}

#[derive(Debug, Clone)]
enum Step {
    Focus,
    Blur,
    Enter,
    CompositionStart,
    CompositionEnd,
    Type(String),
    Change(String),
    Compose(String),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => (name, Some(arg.to_string())),
            None => (s, None),
        };
        let step = match (name, arg) {
            ("focus", None) => Step::Focus,
            ("blur", None) => Step::Blur,
            ("enter", None) => Step::Enter,
            ("compositionstart", None) => Step::CompositionStart,
            ("compositionend", None) => Step::CompositionEnd,
            ("type", Some(arg)) => Step::Type(arg),
            ("change", Some(arg)) => Step::Change(arg),
            ("compose", Some(arg)) => Step::Compose(arg),
            _ => bail!("unrecognised step {s:?}"),
        };
        Ok(step)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut context = config.context()?;
    if let Some(locale) = &cli.locale {
        context.i18n = I18n::new(locale)?;
    }

    let changes: MockFn<String> = MockFn::new();
    let enters: MockFn<String> = MockFn::new();
    let focuses: MockFn<()> = MockFn::new();
    let blurs: MockFn<()> = MockFn::new();

    let mut props = TextFieldProps::new()
        .disabled(cli.disabled)
        .on_change(changes.text_handler())
        .on_enter(enters.text_handler())
        .on_focus(focuses.focus_handler())
        .on_blur(blurs.focus_handler());
    props.value = cli.value;
    props.placeholder = cli
        .placeholder
        .or_else(|| cli.field_name.map(|name| context.i18n.named_placeholder(&name)));
    props.class_name = cli.class_name;

    let mut doc = Document::with_context(context);
    let id = doc.render(props);
    let user = UserEvent::setup();

    tracing::info!(steps = cli.steps.len(), "replaying steps");
    for step in &cli.steps {
        tracing::debug!(?step, "step");
        match step {
            Step::Focus => fire_event::focus(&mut doc, id)?,
            Step::Blur => fire_event::blur(&mut doc, id)?,
            Step::Enter => fire_event::key_down(&mut doc, id, Key::Enter)?,
            Step::CompositionStart => fire_event::composition_start(&mut doc, id)?,
            Step::CompositionEnd => fire_event::composition_end(&mut doc, id)?,
            Step::Type(keys) => user.type_text(&mut doc, id, keys)?,
            Step::Change(text) => fire_event::change(&mut doc, id, text)?,
            Step::Compose(text) => user.compose(&mut doc, id, text)?,
        }
    }

    let output = json!({
        "element": doc.element(id)?,
        "state": doc.field(id)?.state(),
        "calls": {
            "change": changes.calls(),
            "enter": enters.calls(),
            "focus": focuses.call_count(),
            "blur": blurs.call_count(),
        },
        "events": doc.events(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
