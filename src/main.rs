use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use next_scaffold::{
    layout::RouterMode,
    plan::{GenerationFlags, ScaffoldFlags},
};
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Writes starter pages plus optional Tailwind and TypeScript configs")
                .args(common_args())
                .arg(
                    Arg::new("src")
                        .long("src")
                        .help("use src/ directory layout")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("tailwind")
                        .long("tailwind")
                        .help("write Tailwind config and global css")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("ts")
                        .long("ts")
                        .help("write tsconfig.json template")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("scaffold")
                .about("Creates the project directory skeleton and optional style templates")
                .args(common_args())
                .arg(
                    Arg::new("no-src")
                        .long("no-src")
                        .help("do not create src/ prefix")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("templates")
                        .long("templates")
                        .help("write basic Tailwind and CSS templates")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("generate", args)) => handle_generate(args),
        Some(("scaffold", args)) => handle_scaffold(args),
        _ => unreachable!(),
    }
}

fn common_args() -> [Arg; 4] {
    [
        Arg::new("root")
            .long("root")
            .help("project root path")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value("."),
        Arg::new("router")
            .long("router")
            .help("router mode")
            .value_parser(["app", "pages"])
            .default_value("app"),
        Arg::new("force")
            .long("force")
            .help("overwrite existing files")
            .action(ArgAction::SetTrue),
        Arg::new("dry-run")
            .long("dry-run")
            .help("preview the files that would be written without touching the disk")
            .action(ArgAction::SetTrue),
    ]
}

fn init_logger(is_verbose: bool) {
    let level = if is_verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::debug!("executing in verbose mode");
}

fn root_path(args: &ArgMatches) -> PathBuf {
    args.get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

fn router_mode(args: &ArgMatches) -> RouterMode {
    args.get_one::<String>("router")
        .map(|mode| RouterMode::from(mode.as_str()))
        .unwrap_or_default()
}

fn handle_generate(args: &ArgMatches) -> miette::Result<()> {
    let flags = GenerationFlags {
        root_path: root_path(args),
        router_mode: router_mode(args),
        use_src_layout: args.get_flag("src"),
        include_style_templates: args.get_flag("tailwind"),
        include_type_config: args.get_flag("ts"),
        force_overwrite: args.get_flag("force"),
    };

    next_scaffold::actions::generate_basics(&flags, args.get_flag("dry-run"))?;

    Ok(())
}

fn handle_scaffold(args: &ArgMatches) -> miette::Result<()> {
    let flags = ScaffoldFlags {
        root_path: root_path(args),
        router_mode: router_mode(args),
        use_src_layout: !args.get_flag("no-src"),
        include_templates: args.get_flag("templates"),
        force_overwrite: args.get_flag("force"),
    };

    next_scaffold::actions::scaffold_project(&flags, args.get_flag("dry-run"))?;

    Ok(())
}
