mod cli;
mod commands;
mod logging;

use cli::{CheckParams, DumpParams, ExecParams, LogParams, TermsParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };

    logging::init(LogParams::from_matches(name, m).into());

    match name {
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "dump" => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        "exec" => {
            let params = ExecParams::from_matches(m);
            commands::exec::run(params.into());
        }
        "trace" => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        "terms" => {
            let params = TermsParams::from_matches(m);
            commands::terms::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
