use crate::*;

/// Application wide state, created once at startup and handed to whoever needs it.
#[derive(Clone, Debug)]
pub struct AppContext {
    files: AppFiles,
    settings: Settings,
    scoreboard: Scoreboard,
}

impl AppContext {
    /// Creates the application directories and loads settings and scores.
    pub fn init(files: AppFiles) -> Result<Self> {
        files.initialize()?;
        let settings = Settings::load(&files)?;
        let scoreboard = Scoreboard::load(&files)?;
        log::debug!(
            "Loaded settings from {}, last board {}",
            files.config_dir().display(),
            settings.last_board_size()
        );

        Ok(Self {
            files,
            settings,
            scoreboard,
        })
    }

    pub fn files(&self) -> &AppFiles {
        &self.files
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Changes are kept in memory until [`AppContext::shutdown`].
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn scoreboard_mut(&mut self) -> &mut Scoreboard {
        &mut self.scoreboard
    }

    /// Adds a finished game to the scoreboard and saves it, returns whether it is the new best.
    pub fn record_score(&mut self, score: GameScore) -> Result<bool> {
        let new_best = self.scoreboard.add(score);
        self.scoreboard.save(&self.files)?;
        log::debug!(
            "Recorded {}s on {}, new best: {}",
            score.second_of_day(),
            score.board_size,
            new_best
        );
        Ok(new_best)
    }

    /// Persists the settings.
    pub fn shutdown(self) -> Result<()> {
        self.settings.save(&self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::tests::temp_files;
    use sapper_core::BoardSize;

    #[test]
    fn init_creates_directories_with_defaults() {
        let files = temp_files("context-init");

        let ctx = AppContext::init(files.clone()).unwrap();

        assert!(files.config_dir().is_dir());
        assert!(files.data_dir().is_dir());
        assert_eq!(ctx.settings(), &Settings::default());
        assert_eq!(ctx.scoreboard(), &Scoreboard::new());
    }

    #[test]
    fn init_fails_on_malformed_scores() {
        let files = temp_files("context-malformed");
        files.initialize().unwrap();
        files.write(AppFile::Scores, "<Scores><Score").unwrap();

        assert!(matches!(AppContext::init(files), Err(AppError::Xml(_))));
    }

    #[test]
    fn record_score_saves_scoreboard() {
        let files = temp_files("context-record");
        let mut ctx = AppContext::init(files.clone()).unwrap();

        let new_best = ctx
            .record_score(GameScore::today(BoardSize::SMALL, 33))
            .unwrap();

        assert!(new_best);
        let saved = Scoreboard::load(&files).unwrap();
        assert_eq!(&saved, ctx.scoreboard());
        assert_eq!(saved.scores(BoardSize::SMALL)[0].second_of_day(), 33);
    }

    #[test]
    fn settings_are_saved_on_shutdown() {
        let files = temp_files("context-shutdown");
        let mut ctx = AppContext::init(files.clone()).unwrap();

        ctx.settings_mut().set_last_board_size(BoardSize::MEDIUM);
        assert!(!files.path(AppFile::Settings).exists());
        ctx.shutdown().unwrap();

        let ctx = AppContext::init(files).unwrap();
        assert_eq!(ctx.settings().last_board_size(), BoardSize::MEDIUM);
    }
}
