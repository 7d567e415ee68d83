pub mod category;
pub mod menu;
pub mod report;
pub mod workload;

pub use category::{CategoryInfo, ImtCategory};
pub use menu::{MenuItem, MenuRecommendation};
pub use report::{Assessment, CalorieRange, FormInput};
pub use workload::{suggest_workload, ParseWorkloadError, Workload, WorkloadInfo};
