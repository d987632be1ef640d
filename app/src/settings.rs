use sapper_core::BoardSize;

use crate::xml::{attribute_or, elements, parse, writer};
use crate::*;

const XML_ROOT: &str = "settings";
const XML_LAST_SIZE: &str = "lastBoardSize";

const ATTR_WIDTH: &str = "width";
const ATTR_HEIGHT: &str = "height";
const ATTR_MINES: &str = "mines";

/// User preferences kept between runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    last_board_size: BoardSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_board_size: BoardSize::BIG,
        }
    }
}

impl Settings {
    pub fn last_board_size(&self) -> BoardSize {
        self.last_board_size
    }

    pub fn set_last_board_size(&mut self, size: BoardSize) {
        self.last_board_size = size;
    }

    pub fn to_xml(&self) -> String {
        let size = self.last_board_size;
        let mut w = writer();
        w.start_element(XML_ROOT);
        w.start_element(XML_LAST_SIZE);
        w.write_attribute(ATTR_WIDTH, &size.width());
        w.write_attribute(ATTR_HEIGHT, &size.height());
        w.write_attribute(ATTR_MINES, &size.mines());
        w.end_element();
        w.end_document()
    }

    pub fn from_xml(text: &str) -> Result<Self> {
        let doc = parse(text)?;
        let mut settings = Self::default();

        if let Some(node) = elements(doc.root_element(), XML_LAST_SIZE).next() {
            let default = BoardSize::BIG;
            settings.last_board_size = BoardSize::new(
                attribute_or(node, ATTR_WIDTH, default.width())?,
                attribute_or(node, ATTR_HEIGHT, default.height())?,
                attribute_or(node, ATTR_MINES, default.mines())?,
            )?;
        }

        Ok(settings)
    }

    /// Loads saved settings, a missing file gives the defaults.
    pub fn load(files: &AppFiles) -> Result<Self> {
        match files.read(AppFile::Settings)? {
            Some(text) => Self::from_xml(&text),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, files: &AppFiles) -> Result<()> {
        files.write(AppFile::Settings, &self.to_xml())
    }

    /// Applies `f` and writes the result right away.
    pub fn update(&mut self, files: &AppFiles, f: impl FnOnce(&mut Self)) -> Result<()> {
        f(self);
        self.save(files)
    }
}
