// stackprobe: call stack growth across nested, indirect and recursive calls

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stackprobe::config::{self, Config};
use stackprobe::probe::record::{Echo, ProbeOutput, Record};
use stackprobe::probe::summary::Summary;
use stackprobe::probe::{Baseline, Probe};
use stackprobe::ui::App;
use stackprobe::{logging, platform, workload};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let baseline = Baseline::capture();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("stackprobe");

    let config = Config::from_args(&args).with_env();

    if config.help {
        println!("{}", config::usage(program_name));
        return Ok(());
    }

    logging::init(config.color);
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    if !platform::NATIVE {
        log::warn!("no register access on this target, offsets are approximate");
    }
    log::info!("depth={} argc={}", config.depth, config.argc);

    println!("--- {:#x} {:#x}", baseline.sp, baseline.fp);

    let echo = if config.color { Echo::Color } else { Echo::Plain };
    let mut probe = Probe::new(baseline, ProbeOutput::new(echo));
    let sums = workload::run(&mut probe, config.argc, config.depth);
    log::debug!("checksums: {:?}", sums);
    log::info!("{} recursive descents", probe.descents());

    let records = probe.into_output().into_records();

    if config.summary {
        println!();
        print!("{}", Summary::from_records(&records));
    }

    if config.tui {
        run_viewer(records)?;
    }

    Ok(())
}

fn run_viewer(records: Vec<Record>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(records);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
