// SPDX-License-Identifier: MPL-2.0
//! `storyline` command-line driver.
//!
//! Loads a dataset and an options document, mounts the timeline on the
//! in-memory host and replays a list of navigation steps, printing every
//! public event and the final layout.

use std::process::ExitCode;
use storyline::application::{Message, NavKey, Timeline, TimelineEvent};
use storyline::config::{self, OptionsFile};
use storyline::domain::{Dataset, ItemId};
use storyline::i18n::{EmbeddedSource, HttpSource};
use storyline::infrastructure::MemoryBackend;

const HELP: &str = "\
storyline - drive a timeline from the command line

USAGE:
    storyline [OPTIONS] <DATASET.toml>

OPTIONS:
    --options <FILE>     Options document (default: platform config dir)
    --width <PX>         Container width [default: 1000]
    --height <PX>        Container height [default: 700]
    --lang <CODE>        UI language, `auto` for the OS locale
    --headless           Disable the content view
    --fragment <FRAG>    Initial location fragment, e.g. event-my-id
    --steps <LIST>       Comma separated: next, prev, start, end, zoom-in,
                         zoom-out, goto:<n>, id:<id>, remove:<n>, resize:<w>x<h>
    --debug              Debug logging
    -h, --help           Print help
";

struct Args {
    dataset: String,
    options: Option<String>,
    width: f32,
    height: f32,
    lang: Option<String>,
    headless: bool,
    fragment: Option<String>,
    steps: Vec<String>,
    debug: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let parsed = Args {
        options: args.opt_value_from_str("--options")?,
        width: args.opt_value_from_str("--width")?.unwrap_or(1000.0),
        height: args.opt_value_from_str("--height")?.unwrap_or(700.0),
        lang: args.opt_value_from_str("--lang")?,
        headless: args.contains("--headless"),
        fragment: args.opt_value_from_str("--fragment")?,
        steps: args
            .opt_value_from_str::<_, String>("--steps")?
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        debug: args.contains("--debug"),
        dataset: args.free_from_str()?,
    };
    Ok(Some(parsed))
}

fn apply_step(timeline: &mut Timeline, backend: &MemoryBackend, step: &str) {
    match step.split_once(':') {
        None => match step {
            "next" => timeline.update(Message::Key(NavKey::Right)),
            "prev" => timeline.update(Message::Key(NavKey::Left)),
            "start" => timeline.go_to_start(),
            "end" => timeline.go_to_end(),
            "zoom-in" => timeline.zoom_in(),
            "zoom-out" => timeline.zoom_out(),
            other => tracing::warn!(step = other, "unknown step"),
        },
        Some(("goto", n)) => match n.parse() {
            Ok(n) => timeline.go_to(n),
            Err(_) => tracing::warn!(step, "invalid slide index"),
        },
        Some(("id", id)) => timeline.go_to_id(&ItemId::from(id)),
        Some(("remove", n)) => match n.parse() {
            Ok(n) => {
                let _ = timeline.remove(n);
            }
            Err(_) => tracing::warn!(step, "invalid event index"),
        },
        Some(("resize", size)) => {
            let parsed = size
                .split_once('x')
                .and_then(|(w, h)| Some((w.parse::<f32>().ok()?, h.parse::<f32>().ok()?)));
            match parsed {
                Some((width, height)) => backend.resize(width, height),
                None => tracing::warn!(step, "invalid size, expected <w>x<h>"),
            }
        }
        Some(_) => tracing::warn!(step, "unknown step"),
    }
    backend.run_until_idle(timeline);
}

fn describe(event: &TimelineEvent) -> String {
    match event {
        TimelineEvent::Change { unique_id } => format!("change {unique_id}"),
        TimelineEvent::ZoomIn { zoom_level } => format!("zoom_in {zoom_level}"),
        TimelineEvent::ZoomOut { zoom_level } => format!("zoom_out {zoom_level}"),
        TimelineEvent::Added { unique_id } => format!("added {unique_id}"),
        TimelineEvent::Removed { unique_id } => format!("removed {unique_id}"),
        TimelineEvent::HashUpdated { hashbookmark, .. } => format!("hash_updated {hashbookmark}"),
        other => format!("{other:?}"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };
    storyline::logging::init(args.debug);

    let options_file = match &args.options {
        Some(path) => config::load_from_path(std::path::Path::new(path)),
        None => config::load(),
    };
    let mut options_file: OptionsFile = match options_file {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if args.lang.is_some() {
        options_file.language = args.lang.clone();
    }
    if args.headless {
        options_file.headless = Some(true);
    }
    if args.fragment.is_some() {
        options_file.hash_bookmark = Some(true);
    }

    let dataset = match std::fs::read_to_string(&args.dataset)
        .map_err(storyline::Error::from)
        .and_then(|text| Dataset::from_toml_str(&text))
    {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut backend = MemoryBackend::new(args.width, args.height);
    if let Some(fragment) = &args.fragment {
        backend = backend.with_fragment(fragment);
    }
    let mut timeline = Timeline::from_file(options_file, backend.host());
    let _ = timeline.on_any(|event| println!("event: {}", describe(event)));

    match timeline.options().script_path.clone() {
        Some(script_path) => timeline.load_language(&HttpSource::new(script_path)).await,
        None => timeline.load_language(&EmbeddedSource).await,
    }
    timeline.set_config(dataset);
    backend.run_until_idle(&mut timeline);

    if !timeline.is_ready() {
        if let Some(message) = backend.message() {
            eprintln!("{message}");
        }
        return ExitCode::FAILURE;
    }

    for step in &args.steps {
        apply_step(&mut timeline, &backend, step);
    }

    if let Some(current) = timeline.current_id() {
        println!("current: {current}");
    }
    if let Some(state) = timeline.display_state() {
        println!(
            "layout: {:?} {}x{} axis={} content={:?}",
            state.layout, state.width, state.height, state.axis_height, state.content_height
        );
    }
    if let Some(class) = backend.display_class() {
        println!("class: {class}");
    }
    if let Some(fragment) = backend.fragment() {
        println!("fragment: #{fragment}");
    }
    ExitCode::SUCCESS
}
