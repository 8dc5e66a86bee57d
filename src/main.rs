use anyhow::Context;
use clap::Parser;
use health_tracker::utils::logger;
use health_tracker::{
    CliConfig, Console, HealthObserver, HealthTrackerController, HealthTrackerModel,
    HealthTrackerView, MobileApp, Pedometer, Session,
};
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting health-tracker");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_tracker_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let pedometer = Pedometer::instance();
    pedometer
        .borrow_mut()
        .apply_settings(config.pedometer_settings());

    let console = Console::stdout();

    let mobile_app: Rc<dyn HealthObserver> = Rc::new(MobileApp::new(console.clone()));
    pedometer.borrow_mut().add_observer(mobile_app);

    let model = HealthTrackerModel::new(Rc::clone(&pedometer))
        .with_steps_per_activity(config.steps_per_activity())
        .with_console(console.clone());
    let controller = HealthTrackerController::new(model, HealthTrackerView)
        .with_water_consumed(config.water_consumed_ml());

    let mut session = Session::new(controller);
    let stdin = std::io::stdin();
    session
        .run(stdin.lock(), console)
        .context("interactive session failed")?;

    let pedometer = pedometer.borrow();
    tracing::info!(
        "✅ Session finished: {} steps, {} calories",
        pedometer.total_steps(),
        pedometer.total_calories_burned()
    );

    Ok(())
}
