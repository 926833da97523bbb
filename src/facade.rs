// Facade Pattern - a home theater behind two or three calls.
// Subsystems keep their full interface; the facade only sequences them.

use crate::console::Console;

pub struct Amplifier {
    console: Console,
}

impl Amplifier {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn on(&self) {
        self.console.say("Amplifier on");
    }

    pub fn set_volume(&self, level: u8) {
        self.console.say(format!("Setting volume to {}", level));
    }

    pub fn off(&self) {
        self.console.say("Amplifier off");
    }
}

pub struct Tuner {
    console: Console,
}

impl Tuner {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn on(&self) {
        self.console.say("Tuner on");
    }

    pub fn set_am(&self) {
        self.console.say("Setting AM mode");
    }

    pub fn set_fm(&self) {
        self.console.say("Setting FM mode");
    }

    pub fn off(&self) {
        self.console.say("Tuner off");
    }
}

pub struct DvdPlayer {
    console: Console,
}

impl DvdPlayer {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    pub fn on(&self) {
        self.console.say("DVD Player on");
    }

    pub fn play(&self, movie: &str) {
        self.console.say(format!("Playing \"{}\"", movie));
    }

    pub fn stop(&self) {
        self.console.say("Stopping DVD");
    }

    pub fn eject(&self) {
        self.console.say("Ejecting DVD");
    }

    pub fn off(&self) {
        self.console.say("DVD Player off");
    }
}

// ============================================================================
// Facade
// ============================================================================

pub struct HomeTheaterFacade {
    amplifier: Amplifier,
    tuner: Tuner,
    dvd_player: DvdPlayer,
    console: Console,
}

impl HomeTheaterFacade {
    pub fn new(
        amplifier: Amplifier,
        tuner: Tuner,
        dvd_player: DvdPlayer,
        console: Console,
    ) -> Self {
        Self {
            amplifier,
            tuner,
            dvd_player,
            console,
        }
    }

    pub fn watch_movie(&self, movie: &str) {
        self.console.say("Get ready to watch a movie...");
        self.amplifier.on();
        self.amplifier.set_volume(5);
        self.dvd_player.on();
        self.dvd_player.play(movie);
    }

    pub fn end_movie(&self) {
        self.console.say("Shutting movie theater down...");
        self.dvd_player.stop();
        self.dvd_player.eject();
        self.dvd_player.off();
        self.amplifier.off();
    }

    pub fn listen_to_radio(&self) {
        self.console.say("Tuning in the radio...");
        self.tuner.on();
        self.tuner.set_fm();
        self.amplifier.on();
    }

    pub fn end_radio(&self) {
        self.tuner.off();
        self.amplifier.off();
    }
}

pub fn facade_example(console: &Console) {
    let home_theater = HomeTheaterFacade::new(
        Amplifier::new(console.clone()),
        Tuner::new(console.clone()),
        DvdPlayer::new(console.clone()),
        console.clone(),
    );

    home_theater.watch_movie("Raiders of the Lost Ark");
    console.say("");
    home_theater.end_movie();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theater(console: &Console) -> HomeTheaterFacade {
        HomeTheaterFacade::new(
            Amplifier::new(console.clone()),
            Tuner::new(console.clone()),
            DvdPlayer::new(console.clone()),
            console.clone(),
        )
    }

    #[test]
    fn test_watch_movie_sequence() {
        let console = Console::capture();
        theater(&console).watch_movie("Alien");
        assert_eq!(
            console.lines(),
            vec![
                "Get ready to watch a movie...",
                "Amplifier on",
                "Setting volume to 5",
                "DVD Player on",
                "Playing \"Alien\"",
            ]
        );
    }

    #[test]
    fn test_end_movie_sequence() {
        let console = Console::capture();
        theater(&console).end_movie();
        assert_eq!(
            console.lines(),
            vec![
                "Shutting movie theater down...",
                "Stopping DVD",
                "Ejecting DVD",
                "DVD Player off",
                "Amplifier off",
            ]
        );
    }

    #[test]
    fn test_radio_uses_tuner() {
        let console = Console::capture();
        let theater = theater(&console);
        theater.listen_to_radio();
        theater.end_radio();
        assert_eq!(
            console.lines(),
            vec![
                "Tuning in the radio...",
                "Tuner on",
                "Setting FM mode",
                "Amplifier on",
                "Tuner off",
                "Amplifier off",
            ]
        );
    }

    #[test]
    fn test_subsystems_still_usable_directly() {
        let console = Console::capture();
        let tuner = Tuner::new(console.clone());
        tuner.set_am();
        assert_eq!(console.lines(), vec!["Setting AM mode"]);
    }
}
