use std::time::{Duration, Instant};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    TitleScreen,
    Playing,
    Paused,
    GameOver,
}

/// Combines fixed-timestep bookkeeping with screen state management.
/// Transitions only happen through the named methods below; calling
/// one from the wrong state is a silent no-op (e.g. the pause key on
/// the title screen does nothing).
pub struct Control {
    game_frame_duration: Duration,
    last_update: Instant,

    // amount of time which game frames have not yet been accounted
    // for (will be included next time this is done)
    remainder: f64, // secs

    // number of game frames that still need to be performed to catch
    // up with the current time
    missed_updates: Option<usize>,

    state: State,
}

impl Control {
    pub fn new(fps: f64) -> Self {
        Self {
            game_frame_duration: Duration::from_nanos((1_000_000_000.0 / fps) as u64),
            last_update: Instant::now(),
            remainder: 0.,
            missed_updates: None,
            state: State::TitleScreen,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    // repeatedly called in update() as a while loop condition, counts
    // whole game frames elapsed since the last call and carries the
    // fractional remainder so variable render framerates still
    // advance the simulation in fixed steps
    pub fn can_update(&mut self) -> bool {
        if self.state != State::Playing {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                let game_frames = self.last_update.elapsed().as_secs_f64()
                    / self.game_frame_duration.as_secs_f64()
                    + self.remainder;
                let missed_updates = game_frames as usize;

                if missed_updates > 0 {
                    self.remainder = game_frames % 1.;
                    self.last_update = Instant::now();
                    self.missed_updates = Some(missed_updates - 1);
                    true
                } else {
                    false
                }
            }
        }
    }

    // forget time spent outside Playing so resuming doesn't produce a
    // burst of catch-up ticks
    fn resume_clock(&mut self) {
        self.last_update = Instant::now();
        self.remainder = 0.;
        self.missed_updates = None;
    }

    /// TitleScreen -> Playing (confirm key)
    pub fn begin(&mut self) {
        if self.state == State::TitleScreen {
            self.state = State::Playing;
            self.resume_clock();
        }
    }

    /// Playing -> Paused (pause key)
    pub fn pause(&mut self) {
        if self.state == State::Playing {
            self.state = State::Paused;
            self.missed_updates = None;
        }
    }

    /// Paused -> Playing (pause key)
    pub fn unpause(&mut self) {
        if self.state == State::Paused {
            self.state = State::Playing;
            self.resume_clock();
        }
    }

    /// Playing -> GameOver (collision detected this tick)
    pub fn game_over(&mut self) {
        if self.state == State::Playing {
            self.state = State::GameOver;
        }
    }

    /// GameOver -> TitleScreen (confirm key), the caller performs the
    /// session reset
    pub fn to_title(&mut self) {
        if self.state == State::GameOver {
            self.state = State::TitleScreen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn only_begin_leaves_the_title_screen() {
        let mut control = Control::new(10.);
        assert_eq!(control.state(), State::TitleScreen);

        control.pause();
        control.unpause();
        control.game_over();
        control.to_title();
        assert_eq!(control.state(), State::TitleScreen);

        control.begin();
        assert_eq!(control.state(), State::Playing);
    }

    #[test]
    fn full_transition_cycle() {
        let mut control = Control::new(10.);
        control.begin();

        control.pause();
        assert_eq!(control.state(), State::Paused);
        // game over can't happen while paused
        control.game_over();
        assert_eq!(control.state(), State::Paused);

        control.unpause();
        assert_eq!(control.state(), State::Playing);

        control.game_over();
        assert_eq!(control.state(), State::GameOver);
        // begin only works from the title screen
        control.begin();
        assert_eq!(control.state(), State::GameOver);

        control.to_title();
        assert_eq!(control.state(), State::TitleScreen);
    }

    #[test]
    fn no_updates_outside_playing() {
        let mut control = Control::new(1000.);
        thread::sleep(Duration::from_millis(5));
        assert!(!control.can_update());

        control.begin();
        control.pause();
        thread::sleep(Duration::from_millis(5));
        assert!(!control.can_update());
    }

    #[test]
    fn fixed_timestep_catches_up() {
        // high fps to keep the test short
        let mut control = Control::new(100.);
        control.begin();
        thread::sleep(Duration::from_millis(35));

        let mut updates = 0;
        while control.can_update() {
            updates += 1;
            assert!(updates < 1000);
        }
        // at least 35ms / 10ms worth of game frames
        assert!(updates >= 3);
    }
}
