//! Game wheel screen.
//!
//! A spin is decided the moment it starts: `Spin` draws from the pool and
//! plans the rotation, `Settle` reveals the pick once the animation is over.
//! Between the two the wheel keeps showing the items it had when the spin
//! began.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Screen;
use crate::core::config::{PartyConfig, WheelConfig};
use crate::core::item::Item;
use crate::core::rng::DrawRng;
use crate::error::{DrawError, DrawResult};
use crate::pool::{Draw, Pool};
use crate::wheel::{plan_spin, SpinPlan};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamesAction {
    Spin,
    Settle,
    Reset,
}

/// A spin whose outcome is fixed but not yet shown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PendingSpin {
    /// The game that will be revealed.
    pub draw: Draw,
    /// Wheel contents at the moment of the spin.
    pub wheel_items: Vec<Item>,
    pub plan: SpinPlan,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GamesScreen {
    wheel: WheelConfig,
    pool: Pool,
    selected: Option<Item>,
    rotation_deg: f64,
    pending: Option<PendingSpin>,
}

impl GamesScreen {
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn new(config: &PartyConfig) -> DrawResult<Self> {
        config.validate()?;
        Ok(Self {
            wheel: config.wheel.clone(),
            pool: Pool::new(config.games.iter().cloned())?,
            selected: None,
            rotation_deg: 0.0,
            pending: None,
        })
    }

    /// Games still on the wheel, as the wheel should currently be drawn.
    #[must_use]
    pub fn wheel_items(&self) -> Vec<Item> {
        match &self.pending {
            Some(spin) => spin.wheel_items.clone(),
            None => self.pool.remaining().cloned().collect(),
        }
    }

    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Last revealed game.
    #[must_use]
    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    /// Wheel rotation to render; during a spin this is the target.
    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingSpin> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the Spin button should be enabled.
    #[must_use]
    pub fn can_spin(&self) -> bool {
        !self.is_spinning() && !self.pool.is_exhausted()
    }

    #[must_use]
    pub fn wheel_config(&self) -> &WheelConfig {
        &self.wheel
    }
}

impl Screen for GamesScreen {
    type Action = GamesAction;

    fn apply(&self, action: GamesAction, rng: &mut DrawRng) -> DrawResult<Self> {
        match action {
            GamesAction::Spin => {
                if self.is_spinning() {
                    return Err(DrawError::SpinInProgress);
                }

                let wheel_items = self.wheel_items();
                let (draw, pool) = self.pool.draw(rng)?;
                let plan = plan_spin(self.rotation_deg, wheel_items.len(), draw.index, &self.wheel, rng);
                debug!(game = %draw.item, target = plan.target_deg, "wheel spin");

                Ok(Self {
                    wheel: self.wheel.clone(),
                    pool,
                    selected: self.selected.clone(),
                    rotation_deg: plan.target_deg,
                    pending: Some(PendingSpin { draw, wheel_items, plan }),
                })
            }
            GamesAction::Settle => {
                let spin = self.pending.as_ref().ok_or(DrawError::NoSpinPending)?;
                Ok(Self {
                    selected: Some(spin.draw.item.clone()),
                    pending: None,
                    ..self.clone()
                })
            }
            GamesAction::Reset => Ok(Self {
                wheel: self.wheel.clone(),
                pool: self.pool.reset(),
                selected: None,
                rotation_deg: 0.0,
                pending: None,
            }),
        }
    }
}
