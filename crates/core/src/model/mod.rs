mod answer;
mod ids;
mod result;
mod topic;

pub use answer::{Answer, AnswerError, Response};
pub use ids::{ParseIdError, QuestionId, TopicId};
pub use result::{RESULTS_TRIGGER, ResultType};
pub use topic::{Question, Topic};
