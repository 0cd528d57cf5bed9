use std::path::PathBuf;
use std::process;

use clap::Parser;

use appflag::Cli;

fn main() {
    // A .env next to the invocation may provide PROJECT_PATH; absence is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let plan = cli.into_plan().unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let base_path = std::env::var_os("PROJECT_PATH")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    println!(
        "Configuring flag '{}' for service '{}'",
        plan.flag, plan.service
    );
    match &base_path {
        Some(base) => println!("Base path: {}", base.display()),
        None => println!("Base path: current directory"),
    }
    println!();
    println!("{plan}");
    println!();
    println!("Processing appsettings files for {}:", plan.service);

    let report = plan.execute(base_path.as_deref());
    println!("{report}");
}
