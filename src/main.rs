use predictle::app::App;
use predictle::game::{
    dates, seed_prompt, FixedCompletion, GameConfig, GameError, InMemoryPromptStore,
    PromptStore,
};
use predictle::logging;
use predictle::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GameConfig::default();
    logging::init(&config.log_file)?;

    let today = dates::today();
    let mut store = match std::env::args().nth(1) {
        Some(path) => InMemoryPromptStore::load(path).map_err(GameError::from)?,
        None => InMemoryPromptStore::new(),
    };

    // Without a live completion provider, today's prompt comes from the canned reply.
    if store.get(today)?.is_none() {
        seed_prompt(
            &mut store,
            &FixedCompletion::default(),
            today,
            &config.seed_prompt,
            config.default_word_count,
        )?;
    }

    let mut app = App::new(Box::new(store), config, today);
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
