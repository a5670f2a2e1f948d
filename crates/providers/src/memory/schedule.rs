// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::contracts::ScheduleProvider;
use crate::error::ProviderError;
use async_trait::async_trait;
use navalha_domain::ShopSchedule;

/// A fixed in-memory shop schedule.
#[derive(Debug, Clone, Copy)]
pub struct MemorySchedule {
    /// The schedule handed to every caller.
    schedule: ShopSchedule,
}

impl MemorySchedule {
    /// Creates a schedule provider from a fixed schedule.
    #[must_use]
    pub const fn new(schedule: ShopSchedule) -> Self {
        Self { schedule }
    }
}

#[async_trait]
impl ScheduleProvider for MemorySchedule {
    async fn shop_schedule(&self) -> Result<ShopSchedule, ProviderError> {
        Ok(self.schedule)
    }
}
