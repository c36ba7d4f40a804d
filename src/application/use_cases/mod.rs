/// Use cases module containing application business logic orchestration
mod evaluate_policy;

pub use evaluate_policy::EvaluatePolicyUseCase;
