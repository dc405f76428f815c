pub(crate) mod app;
pub(crate) mod generate;
pub(crate) mod history;

pub(crate) use app::ApologyUseCase;
