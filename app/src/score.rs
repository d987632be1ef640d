use sapper_core::{BoardSize, CellCount, Coord};
use std::collections::BTreeMap;
use time::{Date, Duration, OffsetDateTime, Time};

use crate::xml::{attribute, elements, parse, writer};
use crate::*;

/// Number of best results kept per board size.
pub const TOP_SIZE: usize = 10;

const XML_ROOT: &str = "Scores";
const XML_ELEMENT: &str = "Score";

const ATTR_WIDTH: &str = "width";
const ATTR_HEIGHT: &str = "height";
const ATTR_MINES: &str = "mines";
const ATTR_DATE: &str = "date";
const ATTR_TIME: &str = "time";

const UNIX_EPOCH_JULIAN_DAY: i32 = 2_440_588;
const SECONDS_PER_DAY: u32 = 86_400;

/// A finished game: when it was played and how long it took.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameScore {
    pub board_size: BoardSize,
    pub date: Date,
    /// Completion time, stored as a time of day with second precision
    pub time: Time,
}

impl GameScore {
    pub fn new(board_size: BoardSize, date: Date, time: Time) -> Self {
        Self {
            board_size,
            date,
            time,
        }
    }

    /// Score for a game finished today after `elapsed_secs`.
    pub fn today(board_size: BoardSize, elapsed_secs: u64) -> Self {
        Self::new(
            board_size,
            OffsetDateTime::now_utc().date(),
            time_of_day(elapsed_secs),
        )
    }

    /// Days since 1970-01-01.
    pub fn epoch_day(&self) -> i32 {
        self.date.to_julian_day() - UNIX_EPOCH_JULIAN_DAY
    }

    pub fn second_of_day(&self) -> u32 {
        let (hours, minutes, seconds) = self.time.as_hms();
        u32::from(hours) * 3600 + u32::from(minutes) * 60 + u32::from(seconds)
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        let width: Coord = attribute(node, ATTR_WIDTH)?;
        let height: Coord = attribute(node, ATTR_HEIGHT)?;
        let mines: CellCount = attribute(node, ATTR_MINES)?;
        let epoch_day: i32 = attribute(node, ATTR_DATE)?;
        let second_of_day: u32 = attribute(node, ATTR_TIME)?;

        let julian_day =
            epoch_day
                .checked_add(UNIX_EPOCH_JULIAN_DAY)
                .ok_or_else(|| AppError::InvalidAttribute {
                    attribute: ATTR_DATE,
                    value: epoch_day.to_string(),
                })?;
        if second_of_day >= SECONDS_PER_DAY {
            return Err(AppError::InvalidAttribute {
                attribute: ATTR_TIME,
                value: second_of_day.to_string(),
            });
        }

        Ok(Self::new(
            BoardSize::new(width, height, mines)?,
            Date::from_julian_day(julian_day)?,
            time_of_day(second_of_day.into()),
        ))
    }
}

/// Elapsed seconds as a time of day, capped just before midnight.
fn time_of_day(elapsed_secs: u64) -> Time {
    let max = u64::from(SECONDS_PER_DAY - 1);
    if elapsed_secs > max {
        log::warn!("Elapsed time of {}s does not fit in a day", elapsed_secs);
    }
    Time::MIDNIGHT + Duration::seconds(elapsed_secs.min(max) as i64)
}

/// Best completion times per board size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    scores: BTreeMap<BoardSize, Vec<GameScore>>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Empty scoreboard listing the standard board sizes.
    pub fn new() -> Self {
        Self {
            scores: BoardSize::STANDARD
                .into_iter()
                .map(|size| (size, Vec::new()))
                .collect(),
        }
    }

    /// Board sizes with a score list, smallest first.
    pub fn board_sizes(&self) -> impl Iterator<Item = BoardSize> + '_ {
        self.scores.keys().copied()
    }

    /// Non-standard board sizes that have been played, largest first.
    pub fn custom_sizes(&self) -> Vec<BoardSize> {
        self.scores
            .keys()
            .rev()
            .copied()
            .filter(|size| !size.is_standard())
            .collect()
    }

    /// Scores for `size`, fastest first.
    pub fn scores(&self, size: BoardSize) -> &[GameScore] {
        self.scores.get(&size).map_or(&[], Vec::as_slice)
    }

    /// Records a score, returns whether it is the new best for its board size.
    ///
    /// A full list only admits scores strictly faster than its slowest entry.
    pub fn add(&mut self, score: GameScore) -> bool {
        let bucket = self.scores.entry(score.board_size).or_default();
        let rank = bucket.partition_point(|other| other.time <= score.time);
        if rank >= TOP_SIZE {
            return false;
        }

        bucket.insert(rank, score);
        bucket.truncate(TOP_SIZE);
        rank == 0
    }

    pub fn to_xml(&self) -> String {
        let mut w = writer();
        w.start_element(XML_ROOT);
        for score in self.scores.values().flatten() {
            w.start_element(XML_ELEMENT);
            w.write_attribute(ATTR_WIDTH, &score.board_size.width());
            w.write_attribute(ATTR_HEIGHT, &score.board_size.height());
            w.write_attribute(ATTR_MINES, &score.board_size.mines());
            w.write_attribute(ATTR_DATE, &score.epoch_day());
            w.write_attribute(ATTR_TIME, &score.second_of_day());
            w.end_element();
        }
        w.end_document()
    }

    /// Parses a saved scoreboard; any malformed record fails the whole document.
    pub fn from_xml(text: &str) -> Result<Self> {
        let doc = parse(text)?;
        let mut scoreboard = Self::new();

        for node in elements(doc.root_element(), XML_ELEMENT) {
            let score = GameScore::from_node(node)?;
            scoreboard
                .scores
                .entry(score.board_size)
                .or_default()
                .push(score);
        }

        for (size, bucket) in &mut scoreboard.scores {
            bucket.sort_by_key(|score| score.time);
            if bucket.len() > TOP_SIZE {
                log::warn!("Dropping {} extra scores for {}", bucket.len() - TOP_SIZE, size);
                bucket.truncate(TOP_SIZE);
            }
        }

        Ok(scoreboard)
    }

    /// Loads saved scores, a missing file gives an empty scoreboard.
    pub fn load(files: &AppFiles) -> Result<Self> {
        match files.read(AppFile::Scores)? {
            Some(text) => Self::from_xml(&text),
            None => Ok(Self::new()),
        }
    }

    pub fn save(&self, files: &AppFiles) -> Result<()> {
        files.write(AppFile::Scores, &self.to_xml())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::tests::temp_files;
    use time::Month;

    fn date() -> Date {
        Date::from_calendar_date(2024, Month::March, 15).unwrap()
    }

    fn score(size: BoardSize, secs: u64) -> GameScore {
        GameScore::new(size, date(), time_of_day(secs))
    }

    fn times(scoreboard: &Scoreboard, size: BoardSize) -> Vec<u32> {
        scoreboard
            .scores(size)
            .iter()
            .map(GameScore::second_of_day)
            .collect()
    }

    #[test]
    fn first_score_is_new_best() {
        let mut scoreboard = Scoreboard::new();

        assert!(scoreboard.add(score(BoardSize::SMALL, 120)));
        assert_eq!(times(&scoreboard, BoardSize::SMALL), [120]);
    }

    #[test]
    fn only_strictly_faster_score_is_new_best() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.add(score(BoardSize::SMALL, 120));

        assert!(!scoreboard.add(score(BoardSize::SMALL, 120)));
        assert!(!scoreboard.add(score(BoardSize::SMALL, 300)));
        assert!(scoreboard.add(score(BoardSize::SMALL, 60)));
        assert_eq!(times(&scoreboard, BoardSize::SMALL), [60, 120, 120, 300]);
    }

    #[test]
    fn full_list_rejects_slower_score() {
        let mut scoreboard = Scoreboard::new();
        for secs in (1..=10).map(|n| n * 10) {
            scoreboard.add(score(BoardSize::MEDIUM, secs));
        }
        let before = scoreboard.clone();

        assert!(!scoreboard.add(score(BoardSize::MEDIUM, 101)));
        assert!(!scoreboard.add(score(BoardSize::MEDIUM, 100)));
        assert_eq!(scoreboard, before);
    }

    #[test]
    fn full_list_evicts_slowest() {
        let mut scoreboard = Scoreboard::new();
        for secs in (1..=10).map(|n| n * 10) {
            scoreboard.add(score(BoardSize::BIG, secs));
        }

        assert!(!scoreboard.add(score(BoardSize::BIG, 55)));
        assert!(scoreboard.add(score(BoardSize::BIG, 5)));

        assert_eq!(
            times(&scoreboard, BoardSize::BIG),
            [5, 10, 20, 30, 40, 50, 55, 60, 70, 80]
        );
    }

    #[test]
    fn custom_sizes_are_listed_largest_first() {
        let mut scoreboard = Scoreboard::new();
        let small_custom = BoardSize::new(10, 10, 12).unwrap();
        let large_custom = BoardSize::new(30, 24, 200).unwrap();
        scoreboard.add(score(small_custom, 30));
        scoreboard.add(score(large_custom, 30));
        scoreboard.add(score(BoardSize::BIG, 30));

        assert_eq!(scoreboard.custom_sizes(), [large_custom, small_custom]);
        assert_eq!(scoreboard.board_sizes().count(), 5);
        assert_eq!(scoreboard.board_sizes().next(), Some(BoardSize::SMALL));
    }

    #[test]
    fn encodes_date_and_time_as_numbers() {
        let score = GameScore::new(
            BoardSize::BIG,
            Date::from_calendar_date(1970, Month::January, 2).unwrap(),
            time_of_day(3723),
        );

        assert_eq!(score.epoch_day(), 1);
        assert_eq!(score.second_of_day(), 3723);
        assert_eq!(time_of_day(1_000_000), Time::from_hms(23, 59, 59).unwrap());
    }

    #[test]
    fn xml_round_trip() {
        let mut scoreboard = Scoreboard::new();
        let custom = BoardSize::new(20, 12, 30).unwrap();
        for (size, secs) in [
            (BoardSize::SMALL, 42),
            (BoardSize::SMALL, 17),
            (custom, 600),
            (BoardSize::BIG, 3599),
        ] {
            scoreboard.add(score(size, secs));
        }

        let text = scoreboard.to_xml();
        let loaded = Scoreboard::from_xml(&text).unwrap();

        assert_eq!(loaded, scoreboard);
        assert_eq!(times(&loaded, BoardSize::SMALL), [17, 42]);
        assert!(text.contains(r#"<Score width="20" height="12" mines="30""#));
    }

    #[test]
    fn parses_saved_document() {
        let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<Scores>
    <Score width="8" height="8" mines="10" date="19797" time="95"/>
    <Score width="8" height="8" mines="10" date="19798" time="61"/>
</Scores>"#;

        let scoreboard = Scoreboard::from_xml(text).unwrap();
        let scores = scoreboard.scores(BoardSize::SMALL);

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].second_of_day(), 61);
        assert_eq!(scores[0].epoch_day(), 19798);
        assert_eq!(scores[1].date, date());
    }

    #[test]
    fn malformed_record_fails_whole_load() {
        let bad_number = r#"<Scores>
    <Score width="8" height="8" mines="10" date="1" time="5"/>
    <Score width="8" height="8" mines="ten" date="1" time="5"/>
</Scores>"#;
        assert!(matches!(
            Scoreboard::from_xml(bad_number),
            Err(AppError::InvalidAttribute { attribute: "mines", .. })
        ));

        let bad_size = r#"<Scores><Score width="4" height="8" mines="10" date="1" time="5"/></Scores>"#;
        assert!(matches!(
            Scoreboard::from_xml(bad_size),
            Err(AppError::Game(_))
        ));

        let bad_time = r#"<Scores><Score width="8" height="8" mines="10" date="1" time="86400"/></Scores>"#;
        assert!(matches!(
            Scoreboard::from_xml(bad_time),
            Err(AppError::InvalidAttribute { attribute: "time", .. })
        ));

        let missing = r#"<Scores><Score width="8" height="8" date="1" time="5"/></Scores>"#;
        assert!(matches!(
            Scoreboard::from_xml(missing),
            Err(AppError::MissingAttribute { attribute: "mines", .. })
        ));
    }

    #[test]
    fn load_without_file_is_empty() {
        let files = temp_files("scores-missing");

        let scoreboard = Scoreboard::load(&files).unwrap();

        assert_eq!(scoreboard, Scoreboard::new());
        assert!(scoreboard.scores(BoardSize::BIG).is_empty());
    }

    #[test]
    fn save_then_load() {
        let files = temp_files("scores-save");
        files.initialize().unwrap();
        let mut scoreboard = Scoreboard::new();
        scoreboard.add(score(BoardSize::MEDIUM, 200));
        scoreboard.add(score(BoardSize::MEDIUM, 100));

        scoreboard.save(&files).unwrap();

        assert_eq!(Scoreboard::load(&files).unwrap(), scoreboard);
    }
}
