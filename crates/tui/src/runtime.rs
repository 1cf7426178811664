//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;

use crate::App;

const FRAME: Duration = Duration::from_millis(16);

/// Run `app` until the user quits.
pub fn run(mut app: App) -> Result<()> {
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user quits.
	///
	/// Input is read on its own thread and queued, so every event is handled
	/// in order. Animations advance by the measured time between frames.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();
		let mut last_frame = Instant::now();

		let result: Result<()> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) => self.handle_key(key),
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
				if self.should_quit() {
					break;
				}
			}
			if self.should_quit() {
				break Ok(());
			}

			let now = Instant::now();
			self.tick(now.duration_since(last_frame));
			last_frame = now;
			tui_logger::move_events();

			if let Err(error) = terminal.draw(|frame| self.draw(frame)) {
				break Err(error).context("failed to draw frame");
			}

			thread::sleep(FRAME);
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
