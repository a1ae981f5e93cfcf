use crate::backend::{CountProbe, SessionSnapshot};
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::probe::run_probe;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::ColorScheme;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(50);

/// Runs the UI until the user leaves the funnel or quits.
///
/// The event loop itself is synchronous; the connectivity probe runs on a
/// tokio runtime and reports back through the event channel.
pub fn run<C>(
    client: C,
    probe_collection: String,
    scheme: ColorScheme,
    session: SessionSnapshot,
) -> anyhow::Result<()>
where
    C: CountProbe + 'static,
{
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let mut app = App::new(scheme, session);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let (command_tx, mut command_rx) = tokio::sync::mpsc::channel::<UiCommand>(8);
    app.attach_commands(command_tx);

    let event_tx = events.sender();
    runtime.spawn(async move {
        while let Some(command) = command_rx.recv().await {
            match command {
                UiCommand::RunProbe => {
                    let status = run_probe(&client, &probe_collection).await;
                    if event_tx.send(AppEvent::ProbeResult(status)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::ProbeResult(status)) => app.on_probe_result(status),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    Ok(())
}
