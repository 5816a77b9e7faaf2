use std::sync::mpsc;

use anyhow::Context;
use sidelens_core::{render, update, AppState, Effect, Msg, NO_INPUT_NOTICE};
use sidelens_engine::ClientSettings;

use crate::effects::EffectRunner;
use crate::input;
use crate::panel::TerminalPanel;

/// Everything the main loop reacts to: core messages plus app control.
pub enum AppMsg {
    Core(Msg),
    Quit,
}

pub fn run(backend_url: String) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<AppMsg>();

    let runner = EffectRunner::new(
        msg_tx.clone(),
        ClientSettings {
            base_url: backend_url,
        },
    )
    .context("start analysis engine")?;
    input::spawn_reader(msg_tx);

    let mut state = AppState::new();
    let mut panel = TerminalPanel::new();
    panel.apply_all(&render(&state.view()));
    println!("Type `help` for the list of panel commands.");

    while let Ok(app_msg) = msg_rx.recv() {
        let msg = match app_msg {
            AppMsg::Quit => break,
            AppMsg::Core(msg) => msg,
        };

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;

        if effects.contains(&Effect::NotifyNoInput) {
            panel.notice(NO_INPUT_NOTICE);
        }
        runner.enqueue(effects);

        if state.consume_dirty() {
            panel.apply_all(&render(&state.view()));
        }
    }

    Ok(())
}
