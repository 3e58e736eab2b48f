//! Desktop entrypoint.

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return;
    }

    if let Err(err) = quire::run() {
        eprintln!("quire error: {}", err);
        std::process::exit(1);
    }
}

fn print_help() {
    println!("Quire\n");
    println!("Usage: quire [OPTIONS]\n");
    println!("Options:");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!("  QUIRE_PAGE_SIZE           Documents fetched per load-more (default: 5)");
    println!("  QUIRE_INITIAL_PAGE_SIZE   Documents fetched on first load (default: 5)");
    println!(
        "  QUIRE_DOCUMENT_BASE_URL   Base URL for \"Open in new tab\" (default: http://localhost:3000/documents)"
    );
    println!("  QUIRE_SPELLCHECK          Initial spellcheck state (default: true)");
    println!("  QUIRE_SEED_DOCUMENTS      Sample documents in the local store (default: 12)");
    println!("  RUST_LOG                  Log filter (default: quire=warn,quire_gui=info,quire_core=info)");
}
