//! Client-side search quota
//!
//! The backend answers 429 once a session exceeds its search allowance; the
//! throttle refuses locally first so an over-eager user gets an immediate
//! answer instead of a wasted round trip.

use crate::shared::errors::{AppError, AppResult};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::num::NonZeroU32;

type DirectLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

pub struct SearchThrottle {
    limiter: DirectLimiter,
    per_minute: u32,
}

impl SearchThrottle {
    /// Allow `searches` submissions per minute, all of them available as a burst
    pub fn per_minute(searches: u32) -> Self {
        let burst = NonZeroU32::new(searches.max(1)).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: GovernorRateLimiter::direct(Quota::per_minute(burst)),
            per_minute: burst.get(),
        }
    }

    /// Consume one unit of quota without waiting
    pub fn check(&self) -> AppResult<()> {
        self.limiter.check().map_err(|_| {
            AppError::RateLimitError(format!(
                "search quota of {} per minute exhausted",
                self.per_minute
            ))
        })
    }

    pub fn per_minute_quota(&self) -> u32 {
        self.per_minute
    }
}
