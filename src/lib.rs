//! 이상기체 밀도 계산기. 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 쉽게 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod gas;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;
