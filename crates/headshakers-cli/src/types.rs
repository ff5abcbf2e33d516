use clap::ValueEnum;
use headshakers_types::{FeaturedFilter, SortOption};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum FeaturedArg {
    All,
    Featured,
    NotFeatured,
}

impl From<FeaturedArg> for FeaturedFilter {
    fn from(arg: FeaturedArg) -> Self {
        match arg {
            FeaturedArg::All => FeaturedFilter::All,
            FeaturedArg::Featured => FeaturedFilter::Featured,
            FeaturedArg::NotFeatured => FeaturedFilter::NotFeatured,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SortArg {
    NameAsc,
    NameDesc,
    CountAsc,
    CountDesc,
    ValueAsc,
    ValueDesc,
    LikesDesc,
    ViewsDesc,
    CommentsDesc,
    Newest,
    Oldest,
}

impl From<SortArg> for SortOption {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::NameAsc => SortOption::NameAsc,
            SortArg::NameDesc => SortOption::NameDesc,
            SortArg::CountAsc => SortOption::CountAsc,
            SortArg::CountDesc => SortOption::CountDesc,
            SortArg::ValueAsc => SortOption::ValueAsc,
            SortArg::ValueDesc => SortOption::ValueDesc,
            SortArg::LikesDesc => SortOption::LikesDesc,
            SortArg::ViewsDesc => SortOption::ViewsDesc,
            SortArg::CommentsDesc => SortOption::CommentsDesc,
            SortArg::Newest => SortOption::Newest,
            SortArg::Oldest => SortOption::Oldest,
        }
    }
}
