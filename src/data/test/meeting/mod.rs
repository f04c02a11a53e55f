use crate::data::meeting::MeetingRepository;
use crate::model::meeting::{CreateMeetingParams, MeetingFilter, UpdateMeetingParams};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::meeting::MeetingFactory};

mod create;
mod delete;
mod get_all;
mod get_filtered;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}
