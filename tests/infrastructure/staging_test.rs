use audio_pipeline::infrastructure::staging::{StagingArea, StagingRole};

#[tokio::test]
async fn given_two_areas_on_one_root_when_allocating_then_role_paths_do_not_collide() {
    let root = tempfile::TempDir::new().unwrap();

    let mut first = StagingArea::allocate(root.path(), "encode").await.unwrap();
    let mut second = StagingArea::allocate(root.path(), "encode").await.unwrap();

    assert_ne!(first.dir(), second.dir());
    assert_ne!(
        first.path(&StagingRole::Source),
        second.path(&StagingRole::Source)
    );
}

#[tokio::test]
async fn given_staged_files_when_releasing_then_files_are_removed() {
    let root = tempfile::TempDir::new().unwrap();
    let mut area = StagingArea::allocate(root.path(), "encode").await.unwrap();
    let source = area.path(&StagingRole::Source);
    let output = area.path(&StagingRole::EncodedOutput);
    tokio::fs::write(&source, b"in").await.unwrap();
    tokio::fs::write(&output, b"out").await.unwrap();

    let removed = area.release(&[source.clone(), output.clone()]).await;

    assert_eq!(removed, 2);
    assert!(!source.exists());
    assert!(!output.exists());
}

#[tokio::test]
async fn given_already_released_path_when_releasing_again_then_nothing_happens() {
    let root = tempfile::TempDir::new().unwrap();
    let mut area = StagingArea::allocate(root.path(), "validate").await.unwrap();
    let path = area.path(&StagingRole::ValidationCandidate("64k".into()));
    tokio::fs::write(&path, b"x").await.unwrap();

    assert_eq!(area.release_all().await, 1);
    assert_eq!(area.release_all().await, 0);
}

#[tokio::test]
async fn given_same_role_twice_when_allocating_then_path_is_registered_once() {
    let root = tempfile::TempDir::new().unwrap();
    let mut area = StagingArea::allocate(root.path(), "encode").await.unwrap();

    let a = area.path(&StagingRole::Source);
    let b = area.path(&StagingRole::Source);

    assert_eq!(a, b);
    assert_eq!(area.allocated().len(), 1);
}

#[tokio::test]
async fn given_area_with_leftovers_when_dropped_then_directory_is_removed() {
    let root = tempfile::TempDir::new().unwrap();
    let mut area = StagingArea::allocate(root.path(), "encode").await.unwrap();
    let dir = area.dir().to_path_buf();
    tokio::fs::write(area.path(&StagingRole::Source), b"left behind")
        .await
        .unwrap();

    drop(area);

    assert!(!dir.exists());
}

#[tokio::test]
async fn given_staged_files_when_releasing_all_then_directory_is_removed_while_area_is_alive() {
    let root = tempfile::TempDir::new().unwrap();
    let mut area = StagingArea::allocate(root.path(), "validate").await.unwrap();
    let path = area.path(&StagingRole::ValidationCandidate("128k".into()));
    tokio::fs::write(&path, b"x").await.unwrap();

    let removed = area.release_all().await;

    assert_eq!(removed, 1);
    assert!(!area.dir().exists());
}

#[tokio::test]
async fn given_unreleased_file_when_closing_then_directory_and_file_are_removed() {
    let root = tempfile::TempDir::new().unwrap();
    let mut area = StagingArea::allocate(root.path(), "encode").await.unwrap();
    let dir = area.dir().to_path_buf();
    tokio::fs::write(area.path(&StagingRole::EncodedOutput), b"left behind")
        .await
        .unwrap();

    area.close().await;

    assert!(!dir.exists());
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}
