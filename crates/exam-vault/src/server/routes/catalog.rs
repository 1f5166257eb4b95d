//! Catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::retrieval;
use crate::server::state::AppState;
use crate::types::{CoursesResponse, ExamsResponse, QuestionsResponse};

/// GET /get_courses - Distinct course codes
pub async fn get_courses(State(state): State<AppState>) -> Result<Json<CoursesResponse>> {
    let courses = retrieval::list_courses(state.questions()).await?;
    Ok(Json(CoursesResponse { courses }))
}

/// GET /get_exams/:course_code - Distinct exams of a course
pub async fn get_exams(
    State(state): State<AppState>,
    Path(course_code): Path<String>,
) -> Result<Json<ExamsResponse>> {
    let exams = retrieval::list_exams(state.questions(), &course_code).await?;
    Ok(Json(ExamsResponse { exams }))
}

/// GET /get_questions/:course_code/:exam - Question records of an exam
pub async fn get_questions(
    State(state): State<AppState>,
    Path((course_code, exam)): Path<(String, String)>,
) -> Result<Json<QuestionsResponse>> {
    let questions = retrieval::list_questions(state.questions(), &course_code, &exam).await?;
    Ok(Json(QuestionsResponse { questions }))
}
