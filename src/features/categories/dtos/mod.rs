mod category_dto;

pub use category_dto::{
    CategoryResponseDto, CreateCategoryDto, DeleteCategoryResponseDto, UpdateCategoryDto,
};
