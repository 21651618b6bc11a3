use crown_clash::frameworks::config;
use crown_clash::interface_adapters::render::RenderMode;
use crown_clash::use_cases::RoundOutcome;

fn main() -> std::io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(crown_clash::run_with_config());

    // Stdin reads park a blocking thread that never returns on its own; don't wait for it.
    runtime.shutdown_background();

    // The JSON renderer already wrote the summary as its last line.
    if let RoundOutcome::Completed(result) = outcome? {
        if config::render_mode() == RenderMode::Log {
            println!("{}", result.winner_label());
            for line in result.score_lines() {
                println!("{line}");
            }
        }
    }
    Ok(())
}
