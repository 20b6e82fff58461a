use clap::{Arg, Command};
use log::LevelFilter;
use pc_compat::catalog::{check_products, CheckRequest, InMemoryCatalog};
use pc_compat::evaluator::RuleEvaluator;
use pc_compat::heuristic_config::HeuristicConfig;
use std::fs;
use std::process;

fn main() {
    let matches = Command::new("pc-compat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hardware compatibility checker for PC builds")
        .long_about(
            "Checks whether a set of PC components can be combined: socket and chipset,\n\
             memory, power budget, physical clearance, storage slots, cooling and\n\
             CPU/GPU balance. Prints the verdict and diagnostics as JSON.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Heuristic configuration file (YAML); built-in defaults when omitted")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("FILE")
                .help("Component catalog (YAML, or JSON with a .json extension)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .value_name("FILE")
                .help("Compatibility request: {\"products\": [{\"product_id\", \"product_type\"}]}")
                .requires("catalog")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default heuristic configuration to FILE")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-config")
                .long("test-config")
                .help("Validate the heuristic configuration and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-checks")
                .long("list-checks")
                .help("List the compatibility checks in execution order")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging of each check")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => match HeuristicConfig::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading heuristic configuration: {e:#}");
                process::exit(1);
            }
        },
        None => HeuristicConfig::default(),
    };

    if matches.get_flag("test-config") {
        println!("Heuristic configuration is valid:");
        println!(
            "  power headroom: {}W with GPU, {}W CPU-only, thin margin {}W",
            config.power.system_headroom_watts,
            config.power.cpu_only_headroom_watts,
            config.power.thin_margin_watts
        );
        println!(
            "  cooling margin factor: {}",
            config.cooling.tdp_margin_factor
        );
        println!(
            "  bottleneck ratios: {} / {}",
            config.balance.cpu_bottleneck_ratio, config.balance.gpu_bottleneck_ratio
        );
        return;
    }

    let evaluator = RuleEvaluator::new(config);

    if matches.get_flag("list-checks") {
        for (i, name) in evaluator.check_names().iter().enumerate() {
            println!("{:>2}. {}", i + 1, name);
        }
        return;
    }

    let Some(request_path) = matches.get_one::<String>("check") else {
        eprintln!("Nothing to do: pass --check FILE --catalog FILE (see --help)");
        process::exit(2);
    };

    // clap enforces --catalog alongside --check
    let catalog_path = matches
        .get_one::<String>("catalog")
        .map(String::as_str)
        .unwrap_or_default();

    let catalog = match InMemoryCatalog::load_from_file(catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading catalog: {e:#}");
            process::exit(1);
        }
    };

    let request = match fs::read_to_string(request_path)
        .map_err(anyhow::Error::from)
        .and_then(|content| CheckRequest::from_json(&content))
    {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error reading request {request_path}: {e:#}");
            process::exit(1);
        }
    };

    let result = check_products(&catalog, &evaluator, &request);
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing result: {e}");
            process::exit(1);
        }
    }
}

fn generate_default_config(path: &str) {
    let yaml = match HeuristicConfig::default().to_yaml() {
        Ok(yaml) => yaml,
        Err(e) => {
            eprintln!("Error generating configuration: {e:#}");
            process::exit(1);
        }
    };

    let content = format!(
        "# pc-compat heuristic configuration\n\
         # These values are approximations inherited from the shop's rules of thumb.\n\
         {yaml}"
    );

    match fs::write(path, content) {
        Ok(()) => println!("Default configuration written to: {path}"),
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}
