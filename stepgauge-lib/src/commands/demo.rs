use super::Host;
use super::common::{CommonArgs, SurfaceKind, init_logging};
use super::config::Config;
use crate::Result;
use crate::demo::{DemoAction, DemoDriver};
use crate::progress::{ProgressConnector, ProgressDisplay};
use crate::surfaces::{BarSurface, Surface, TextSurface};
use camino::Utf8Path;
use clap::Parser;
use core::cell::RefCell;
use ohno::IntoAppError;
use std::io::{BufRead, IsTerminal, Write, stderr, stdout};
use std::rc::Rc;

const LOG_TARGET: &str = "      demo";

const HELP_LINE: &str = "Actions: next (n), prev (p), reset (r), show (s), hide (h), quit (q)";

#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Number of steps to count through (overrides the configuration file)
    #[arg(long, short = 't', value_name = "N")]
    pub total: Option<u32>,

    /// How to draw the panel (overrides the configuration file)
    #[arg(long, value_name = "KIND")]
    pub surface: Option<SurfaceKind>,

    /// Comma-separated actions to run instead of reading them from stdin
    #[arg(long, value_name = "ACTIONS", value_delimiter = ',')]
    pub script: Option<Vec<String>>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Buffer the text surface writes into, drained to the host after every action.
#[derive(Debug, Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn take(&self) -> Vec<u8> {
        core::mem::take(&mut *self.0.borrow_mut())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Where the next action comes from.
enum ActionSource<'a> {
    Script(core::slice::Iter<'a, String>),
    Interactive,
}

impl ActionSource<'_> {
    fn next_word<H: Host>(&mut self, host: &mut H) -> Result<Option<String>> {
        match self {
            Self::Script(words) => Ok(words.next().map(|w| w.trim().to_string())),
            Self::Interactive => {
                // bytes that aren't UTF-8 become an unknown action rather than ending the session
                let mut line = Vec::new();
                let read = host.input().read_until(b'\n', &mut line).into_app_err("reading demo input")?;
                Ok((read > 0).then(|| String::from_utf8_lossy(&line).trim().to_string()))
            }
        }
    }
}

/// Run an interactive (or scripted) progress demo
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the input cannot be read
pub fn run_demo<H: Host>(host: &mut H, args: &DemoArgs) -> Result<()> {
    init_logging(args.common.log_level);

    let config = Config::load(Utf8Path::new("."), args.common.config.as_ref())?;
    let total_steps = args.total.unwrap_or(config.total_steps);
    let surface_kind = args.surface.unwrap_or(config.surface);

    let buffer = SharedBuffer::default();
    let surface: Box<dyn Surface> = match surface_kind {
        SurfaceKind::Bar => Box::new(BarSurface::new(config.bar_width, args.common.color.use_colors(stderr().is_terminal()))),
        SurfaceKind::Text => Box::new(TextSurface::new(
            buffer.clone(),
            config.bar_width,
            args.common.color.use_colors(stdout().is_terminal()),
        )),
    };
    log::debug!(target: LOG_TARGET, "Using {surface_kind:?} surface, {} rounding", config.rounding);

    let display = Rc::new(RefCell::new(ProgressDisplay::new(surface, config.rounding)));
    let connector = ProgressConnector::with_display(Some(Rc::clone(&display)));
    let mut demo = DemoDriver::new(connector, total_steps);

    let mut source = match &args.script {
        Some(words) => ActionSource::Script(words.iter()),
        None => {
            let _ = writeln!(host.error(), "{HELP_LINE}");
            ActionSource::Interactive
        }
    };

    demo.start();
    drain(host, &buffer);

    let outcome = apply_actions(host, &mut source, &mut demo, &display, &buffer);

    display.borrow_mut().surface_mut().finish();
    drain(host, &buffer);
    outcome?;

    let display = display.borrow();
    let _ = writeln!(
        host.output(),
        "Completed {} of {} steps ({})",
        demo.current(),
        demo.total_steps(),
        display.rendering().label
    );

    Ok(())
}

/// Apply actions until the source runs dry or a `quit` arrives.
fn apply_actions<H: Host>(
    host: &mut H,
    source: &mut ActionSource<'_>,
    demo: &mut DemoDriver,
    display: &RefCell<ProgressDisplay<Box<dyn Surface>>>,
    buffer: &SharedBuffer,
) -> Result<()> {
    while let Some(word) = source.next_word(host)? {
        if word.is_empty() {
            continue;
        }

        let Ok(action) = word.parse::<DemoAction>() else {
            log::warn!(target: LOG_TARGET, "Ignoring unknown action '{word}'");
            let _ = writeln!(host.error(), "Unknown action '{word}'. {HELP_LINE}");
            continue;
        };

        log::trace!(target: LOG_TARGET, "Applying {action}");
        match action {
            DemoAction::Next => demo.next_step(),
            DemoAction::Prev => demo.prev_step(),
            DemoAction::Reset => demo.reset(),
            DemoAction::Show => display.borrow_mut().show(),
            DemoAction::Hide => display.borrow_mut().hide(),
            DemoAction::Quit => break,
        }
        drain(host, buffer);
    }

    Ok(())
}

fn drain<H: Host>(host: &mut H, buffer: &SharedBuffer) {
    let bytes = buffer.take();
    if !bytes.is_empty() {
        let mut out = host.output();
        let _ = out.write_all(&bytes);
        let _ = out.flush();
    }
}
