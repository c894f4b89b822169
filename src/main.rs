// vmspan: Heap Limit Policy and Memory Range Inspector

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use vmspan::config::CliOptions;
use vmspan::history::RangeHistory;
use vmspan::memory::{AddressSpaceLimit, MemoryRange, ProcessMemoryLimit};
use vmspan::ui::{App, LimitReport};

fn print_usage(program_name: &str) {
    eprintln!(
        "Usage: {} [--fraction N] [--granule-shift S] [--limit BYTES|unlimited] [START SIZE]",
        program_name
    );
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {}                          # Inspect a default range under the platform limit",
        program_name
    );
    eprintln!(
        "  {} --limit 1000000 --granule-shift 10 100 50",
        program_name
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("vmspan");

    let options = match CliOptions::parse(args.iter().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    if options.show_help {
        print_usage(program_name);
        return Ok(());
    }

    let tunables = options.tunables;

    // Compute the heap limit from the override or the platform
    let (ceiling, heap_limit) = match options.limit_override {
        Some(fixed) => {
            let limit = AddressSpaceLimit::new(fixed);
            (limit.ceiling(), limit.heap(&tunables))
        }
        None => {
            let limit = AddressSpaceLimit::new(ProcessMemoryLimit);
            (limit.ceiling(), limit.heap(&tunables))
        }
    };

    match ceiling {
        Some(bytes) => eprintln!("Address space ceiling: 0x{:x} bytes", bytes),
        None => eprintln!("Warning: no address space ceiling reported, treating it as unbounded"),
    }
    eprintln!(
        "Heap limit: 0x{:x} bytes (1/{} of the ceiling, {} byte granules)",
        heap_limit,
        tunables.max_virt_mem_fraction(),
        tunables.granule_size()
    );

    // Default to the second granule, or the first if two do not fit
    let granule = tunables.granule_size();
    let range = options.range.unwrap_or_else(|| match granule.checked_mul(2) {
        Some(_) => MemoryRange::new(granule, granule),
        None => MemoryRange::new(0, granule),
    });
    eprintln!("Inspecting range {} ({} bytes)", range, range.size());

    let report = LimitReport {
        ceiling,
        overridden: options.limit_override.is_some(),
        tunables,
        heap_limit,
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(RangeHistory::new(range), report);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
