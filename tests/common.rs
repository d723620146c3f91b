//! Test utilities & fixtures.
//! Request builders shared by the integration tests.

use fortunecast::fortune::{FortuneRequest, RequestDetail};

#[allow(dead_code)] // Not every test file casts body readings.
pub fn body_request(name: &str, birth: &str, height: &str, weight: &str) -> FortuneRequest {
    FortuneRequest {
        name: name.to_string(),
        birth: birth.to_string(),
        detail: RequestDetail::Body {
            height: height.to_string(),
            weight: weight.to_string(),
        },
    }
}

#[allow(dead_code)] // Not every test file casts goal readings.
pub fn goal_request(name: &str, birth: &str, goal: &str) -> FortuneRequest {
    FortuneRequest {
        name: name.to_string(),
        birth: birth.to_string(),
        detail: RequestDetail::Goal {
            goal: goal.to_string(),
        },
    }
}
