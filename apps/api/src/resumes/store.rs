use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::FindOptions;
use mongodb::Collection;

use crate::errors::AppError;
use crate::models::resume::Resume;

/// Inserts a freshly-stamped document and returns it with the id MongoDB
/// assigned to it.
pub async fn insert_resume(
    resumes: &Collection<Resume>,
    mut resume: Resume,
) -> Result<Resume, AppError> {
    let result = resumes.insert_one(&resume, None).await?;
    resume.id = result.inserted_id.as_object_id();
    Ok(resume)
}

pub async fn find_resume(
    resumes: &Collection<Resume>,
    id: ObjectId,
) -> Result<Option<Resume>, AppError> {
    Ok(resumes.find_one(doc! { "_id": id }, None).await?)
}

/// All resumes owned by `user_id`, newest first. Served by the
/// `user_id` index created at startup.
pub async fn list_resumes_for_user(
    resumes: &Collection<Resume>,
    user_id: &str,
) -> Result<Vec<Resume>, AppError> {
    let options = FindOptions::builder()
        .sort(doc! { "created_at": -1 })
        .build();
    let cursor = resumes.find(doc! { "user_id": user_id }, options).await?;
    Ok(cursor.try_collect().await?)
}

pub async fn replace_resume(
    resumes: &Collection<Resume>,
    id: ObjectId,
    resume: &Resume,
) -> Result<(), AppError> {
    resumes.replace_one(doc! { "_id": id }, resume, None).await?;
    Ok(())
}

/// Returns whether a document was actually deleted.
pub async fn delete_resume(resumes: &Collection<Resume>, id: ObjectId) -> Result<bool, AppError> {
    let result = resumes.delete_one(doc! { "_id": id }, None).await?;
    Ok(result.deleted_count > 0)
}
