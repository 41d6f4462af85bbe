mod checkup_vm;
mod results_vm;

pub use checkup_vm::{CheckupIntent, CheckupVm, QuestionVm, map_checkup};
pub use results_vm::{AnswerRowVm, ResultsVm, TopicResultVm, map_results};
