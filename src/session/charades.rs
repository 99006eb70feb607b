//! Charades picker: one prompt at a time, no repeats until reset.

use serde::{Deserialize, Serialize};

use super::Screen;
use crate::core::config::PartyConfig;
use crate::core::item::Item;
use crate::core::rng::DrawRng;
use crate::error::DrawResult;
use crate::pool::Pool;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharadesAction {
    Generate,
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CharadesScreen {
    pool: Pool,
    picked: Option<Item>,
}

impl CharadesScreen {
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn new(config: &PartyConfig) -> DrawResult<Self> {
        config.validate()?;
        Ok(Self {
            pool: Pool::new(config.charades.iter().cloned())?,
            picked: None,
        })
    }

    /// The prompt currently being acted out.
    #[must_use]
    pub fn picked(&self) -> Option<&Item> {
        self.picked.as_ref()
    }

    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// (used, total)
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.pool.drawn_count(), self.pool.total())
    }

    /// Progress as shown to players, e.g. `3/12 used`.
    #[must_use]
    pub fn progress_label(&self) -> String {
        let (used, total) = self.progress();
        format!("{used}/{total} used")
    }

    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.pool.is_exhausted()
    }
}

impl Screen for CharadesScreen {
    type Action = CharadesAction;

    fn apply(&self, action: CharadesAction, rng: &mut DrawRng) -> DrawResult<Self> {
        match action {
            CharadesAction::Generate => {
                let (draw, pool) = self.pool.draw(rng)?;
                Ok(Self {
                    pool,
                    picked: Some(draw.item),
                })
            }
            CharadesAction::Reset => Ok(Self {
                pool: self.pool.reset(),
                picked: None,
            }),
        }
    }
}
