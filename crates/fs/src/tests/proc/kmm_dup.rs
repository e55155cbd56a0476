//! kmm 节点 dup 测试

use super::*;

#[test]
fn test_kmm_dup_inherits_position() {
    let _mock = init_mock();
    let procfs = create_test_procfs();
    let mut handle = open_kmm(&procfs);

    let mut buf = [0u8; 20];
    handle.read(&mut buf).unwrap();

    let dup = handle.dup().unwrap();
    assert_eq!(dup.pos(), 20);
    assert_eq!(dup.name(), KMM_NAME);
    assert_eq!(dup.file().flags(), OpenFlags::O_RDONLY);

    dup.close().unwrap();
    handle.close().unwrap();
}

#[test]
fn test_kmm_dup_copies_staging_buffer() {
    let _mock = init_mock();
    let procfs = create_test_procfs();
    let mut handle = open_kmm(&procfs);
    read_all(&mut handle);

    let dup = handle.dup().unwrap();
    let old = handle.file().private_ref::<KmmFile>().unwrap();
    let new = dup.file().private_ref::<KmmFile>().unwrap();
    assert_eq!(new.line(), old.line());
    assert_eq!(new.linesize(), DEFAULT_DATA_LINE.len());

    dup.close().unwrap();
    handle.close().unwrap();
}

#[test]
fn test_kmm_dup_handles_are_independent() {
    let mock = init_mock();
    let procfs = create_test_procfs();
    let mut handle = open_kmm(&procfs);

    let mut header = [0u8; KMM_HEADER.len()];
    handle.read(&mut header).unwrap();
    let staged = handle.file().private_ref::<KmmFile>().unwrap().line().to_vec();

    let mut dup = handle.dup().unwrap();
    mock.set_mallinfo(uapi::malloc::MallInfo::new(1, 2, 3, 4));
    let mut buf = [0u8; 128];
    let n = dup.read(&mut buf).unwrap();
    assert_eq!(
        &buf[..n],
        b"Mem:             1          2          3          4\n"
    );
    assert_eq!(dup.pos(), 104);

    // 原句柄的偏移量和暂存行不受影响
    assert_eq!(handle.pos(), KMM_HEADER.len());
    assert_eq!(
        handle.file().private_ref::<KmmFile>().unwrap().line(),
        &staged[..]
    );

    // 原句柄续读时重新查询统计
    let n = handle.read(&mut buf).unwrap();
    assert_eq!(
        &buf[..n],
        b"Mem:             1          2          3          4\n"
    );
    assert_eq!(handle.pos(), 104);

    dup.close().unwrap();
    handle.close().unwrap();
}

#[test]
fn test_kmm_dup_survives_close_of_original() {
    let _mock = init_mock();
    let procfs = create_test_procfs();
    let handle = open_kmm(&procfs);

    let mut dup = handle.dup().unwrap();
    handle.close().unwrap();

    let doc = read_all(&mut dup);
    assert_eq!(doc.len(), 104);
    dup.close().unwrap();
}

#[test]
fn test_kmm_dup_without_private() {
    let _mock = init_mock();
    let oldp = OpenFile::new(OpenFlags::O_RDONLY);
    let mut newp = OpenFile::new(OpenFlags::O_RDONLY);

    assert_eq!(
        KMM_OPERATIONS.dup(&oldp, &mut newp),
        Err(FsError::BadFileDescriptor)
    );
    assert!(!newp.has_private());
}
