//! CSS anchors for the listing site's job pages. The class names are build
//! artifacts of the site's bundler and change when the site redeploys; they
//! are collected here so a breakage is a one-file fix.

pub const BASE_URL: &str = "https://www.wanted.co.kr";

/// Marker class whose presence means the listing page finished rendering.
pub const LIST_ITEM_CLASS: &str = "Card_Card__aaatv";
pub const LIST_ITEM_SELECTOR: &str = "li.Card_Card__aaatv";

/// Anchor inside a job card that carries the detail-page href.
pub const DETAIL_LINK_SELECTOR: &str = "div[data-cy='job-card'] > a";

/// Marker class whose presence means the detail page finished rendering.
pub const DESCRIPTION_CLASS: &str = "JobDescription_JobDescription__paragraph__wrapper__WPrKC";
pub const DESCRIPTION_SELECTOR: &str =
    "div.JobDescription_JobDescription__paragraph__wrapper__WPrKC";

pub const SKILL_TAG_SELECTOR: &str = "li.SkillTagItem_SkillTagItem__MAo9X";

pub const TITLE_SELECTOR: &str = "h1.wds-58fmok";
pub const COMPANY_SELECTOR: &str = "a.JobHeader_JobHeader__Tools__Company__Link__NoBQI";
