mod get_plan_item;

pub use get_plan_item::GetPlanItemUseCase;
