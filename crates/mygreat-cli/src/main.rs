use mygreat_cli::{build_cli, init_tracing, run};

#[tokio::main]
async fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    match run(&matches).await {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
