use clap::Parser;
use degeneracy_cliques::cli::Args;
use degeneracy_cliques::driver;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(report) = driver::run(&args) {
        eprintln!("error: {report}");
        let code = report.current_context().exit_code();
        std::process::exit(code);
    }
}
