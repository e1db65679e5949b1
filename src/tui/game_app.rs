//! The full game: title, login, briefing, three challenges and the debrief.
//!
//! `Game` owns the current screen and everything the screens share (score,
//! toasts, RNG, config). It routes keys, applies the screen's `Outcome`, and
//! keeps the delayed advance to the next level in its own timer queue.
//! `GameApp` wires it to the real terminal.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::Frame;
use tracing::{debug, info};

use super::app::status_footer::{render_footer, render_toast_line};
use super::app::{is_interrupt, App, TuiApp};
use super::help::render_help_modal;
use super::screens::{
    Context, HomeScreen, InsiderScreen, IntroScreen, LoginScreen, Outcome, PasswordScreen,
    PhishingScreen, Screen, ScreenId, VictoryScreen, View,
};
use super::theme::{current_theme, Theme};
use super::ui::{render_header, screen_layout};
use crate::config::Config;
use crate::player::clock::{Clock, MonotonicClock};
use crate::player::timers::TimerQueue;
use crate::quiz::announcer::ToastQueue;
use crate::quiz::game::{GameState, Level};

/// State shared by every screen.
struct Services<C: Clock> {
    state: GameState,
    toasts: ToastQueue<C>,
    rng: StdRng,
    config: Config,
}

impl<C: Clock> Services<C> {
    fn context(&mut self) -> Context<'_> {
        Context {
            game: &mut self.state,
            announcer: &mut self.toasts,
            rng: &mut self.rng,
            config: &self.config,
        }
    }
}

pub struct Game<C: Clock + Clone + 'static> {
    clock: C,
    theme: Theme,
    services: Services<C>,
    screen: Box<dyn Screen>,
    /// Pending moves to the next level after a solve
    advance: TimerQueue<Level>,
    show_help: bool,
    quit: bool,
    /// Elapsed second last shown in the header
    shown_second: u64,
}

impl<C: Clock + Clone + 'static> Game<C> {
    pub fn new(clock: C, config: Config, theme: Theme, start: ScreenId, rng: StdRng) -> Result<Self> {
        let now = clock.now();
        let toasts = ToastQueue::new(clock.clone(), config.game.toast_lifetime());
        let mut game = Self {
            clock,
            theme,
            services: Services {
                state: GameState::new(now),
                toasts,
                rng,
                config,
            },
            screen: Box::new(HomeScreen::new()),
            advance: TimerQueue::new(),
            show_help: false,
            quit: false,
            shown_second: 0,
        };
        if start != ScreenId::Home {
            game.goto(start)?;
        }
        Ok(game)
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen.id()
    }

    pub fn state(&self) -> &GameState {
        &self.services.state
    }

    pub fn toasts(&self) -> &ToastQueue<C> {
        &self.services.toasts
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn on_challenge(&self) -> bool {
        matches!(self.screen.id(), ScreenId::Level(level) if level.is_challenge())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if is_interrupt(&key) {
            self.quit = true;
            return Ok(());
        }
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }
        if !self.screen.captures_text() {
            match key.code {
                KeyCode::Char('?') => {
                    self.show_help = true;
                    return Ok(());
                }
                KeyCode::Char('q') => {
                    self.quit = true;
                    return Ok(());
                }
                KeyCode::Char('h') if self.on_challenge() => {
                    self.services.state.toggle_hint();
                    return Ok(());
                }
                _ => {}
            }
        }
        let outcome = self.screen.handle_key(key, &mut self.services.context())?;
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Stay => {}
            Outcome::Goto(id) => self.goto(id)?,
            Outcome::Solved => self.solve(),
            Outcome::Quit => self.quit = true,
        }
        Ok(())
    }

    fn solve(&mut self) {
        let level = self.services.state.level;
        if self.services.state.is_completed(level) {
            return;
        }
        self.services.state.add_points(self.services.config.game.points_per_level);
        self.services.state.complete_level(level);
        if let Some(next) = level.next() {
            let due = self.clock.now() + self.services.config.game.advance_delay();
            self.advance.schedule(due, next);
            debug!(%next, "advance scheduled");
        }
    }

    /// Switch screens, abandoning the current one and any pending advance.
    fn goto(&mut self, id: ScreenId) -> Result<()> {
        self.screen.teardown();
        let cancelled = self.advance.cancel_all();
        if let ScreenId::Level(level) = id {
            if level == Level::Intro {
                self.services.state = GameState::new(self.clock.now());
            }
            self.services.state.set_level(level);
        }
        info!(?id, cancelled, "switching screen");
        self.screen = self.build_screen(id)?;
        Ok(())
    }

    fn build_screen(&mut self, id: ScreenId) -> Result<Box<dyn Screen>> {
        let player = self.services.config.player.clone();
        Ok(match id {
            ScreenId::Home => Box::new(HomeScreen::new()),
            ScreenId::Login => Box::new(LoginScreen::new()),
            ScreenId::Level(Level::Intro) => Box::new(IntroScreen::new(self.clock.clone(), &player)),
            ScreenId::Level(Level::Phishing) => {
                Box::new(PhishingScreen::new(&mut self.services.context())?)
            }
            ScreenId::Level(Level::Password) => {
                Box::new(PasswordScreen::new(&mut self.services.context())?)
            }
            ScreenId::Level(Level::InsiderThreat) => {
                Box::new(InsiderScreen::new(&mut self.services.context())?)
            }
            ScreenId::Level(Level::Victory) => Box::new(VictoryScreen::new(
                self.clock.clone(),
                &player,
                &self.services.state,
            )),
        })
    }

    /// Fire due timers. Returns true if the screen needs redrawing.
    pub fn tick(&mut self) -> Result<bool> {
        let now = self.clock.now();
        let mut changed = self.screen.tick();
        changed |= self.services.toasts.expire();
        while let Some((_, level)) = self.advance.pop_due(now) {
            self.goto(ScreenId::Level(level))?;
            changed = true;
        }
        if matches!(self.screen.id(), ScreenId::Level(_)) {
            let second = self.services.state.elapsed(now).as_secs();
            if second != self.shown_second {
                self.shown_second = second;
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Time until something on screen changes without input.
    pub fn next_wakeup(&self) -> Option<Duration> {
        let now = self.clock.now();
        let header = matches!(self.screen.id(), ScreenId::Level(_)).then(|| {
            let elapsed = self.services.state.elapsed(now);
            Duration::from_secs(elapsed.as_secs() + 1).saturating_sub(elapsed)
        });
        [
            self.screen.next_wakeup(),
            self.advance
                .next_deadline()
                .map(|deadline| deadline.saturating_sub(now)),
            self.services.toasts.time_until_expiry(),
            header,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn render(&self, frame: &mut Frame) {
        let now = self.clock.now();
        let theme = &self.theme;
        let layout = screen_layout(frame.area());
        let view = View {
            game: &self.services.state,
            theme,
            now,
        };

        let body = if matches!(self.screen.id(), ScreenId::Level(_)) {
            render_header(frame, layout.header, &self.services.state, now, theme);
            layout.body
        } else {
            layout.header.union(layout.body)
        };
        self.screen.render(frame, body, &view);
        render_toast_line(frame, layout.toast, self.services.toasts.latest());
        render_footer(frame, layout.footer, &self.screen.footer_keys());

        if self.show_help {
            render_help_modal(frame, frame.area(), theme);
        }
    }
}

/// The game on the real terminal.
pub struct GameApp {
    app: App,
    game: Game<MonotonicClock>,
}

impl GameApp {
    pub fn new(config: Config, start: ScreenId) -> Result<Self> {
        let tick_rate = config.ui.tick_rate();
        let game = Game::new(
            MonotonicClock::new(),
            config,
            current_theme(),
            start,
            StdRng::from_entropy(),
        )?;
        let app = App::new(tick_rate)?;
        Ok(Self { app, game })
    }

    pub fn final_score(&self) -> u32 {
        self.game.state().score
    }
}

impl TuiApp for GameApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.game.handle_key(key)
    }

    fn draw(&mut self) -> Result<()> {
        let game = &self.game;
        self.app.draw(|frame| game.render(frame))
    }

    fn tick(&mut self) -> Result<bool> {
        self.game.tick()
    }

    fn next_wakeup(&self) -> Option<Duration> {
        self.game.next_wakeup()
    }

    fn should_quit(&self) -> bool {
        self.game.should_quit()
    }
}
