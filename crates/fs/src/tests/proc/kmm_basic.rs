//! kmm 节点 open/close/stat 测试

use super::*;

#[test]
fn test_kmm_open_read_only() {
    let _mock = init_mock();
    let mut file = OpenFile::new(OpenFlags::O_RDONLY);

    KMM_OPERATIONS
        .open(&mut file, KMM_NAME, OpenFlags::O_RDONLY, FileMode::empty())
        .unwrap();

    let procfile = file.private_ref::<KmmFile>().unwrap();
    assert_eq!(procfile.linesize(), 0);
    assert_eq!(file.pos(), 0);
}

#[test]
fn test_kmm_open_does_not_query_statistics() {
    let mock = init_mock();
    let procfs = create_test_procfs();

    let handle = open_kmm(&procfs);
    assert_eq!(mock.mallinfo_queries(), 0);
    handle.close().unwrap();
}

#[test]
fn test_kmm_open_write_denied() {
    let _mock = init_mock();

    for flags in [
        OpenFlags::O_WRONLY,
        OpenFlags::O_RDWR,
        OpenFlags::O_WRONLY | OpenFlags::O_CREAT,
        OpenFlags::O_RDWR | OpenFlags::O_TRUNC,
        OpenFlags::O_ACCMODE,
    ] {
        let mut file = OpenFile::new(flags);
        let result = KMM_OPERATIONS.open(&mut file, KMM_NAME, flags, FileMode::empty());
        assert_eq!(result, Err(FsError::PermissionDenied));
        assert!(!file.has_private());
    }
}

#[test]
fn test_kmm_open_extra_flags_allowed() {
    let _mock = init_mock();
    let flags = OpenFlags::O_RDONLY | OpenFlags::O_CLOEXEC | OpenFlags::O_NONBLOCK;
    let mut file = OpenFile::new(flags);

    KMM_OPERATIONS
        .open(&mut file, KMM_NAME, flags, FileMode::empty())
        .unwrap();
    assert!(file.has_private());
}

#[test]
fn test_kmm_open_wrong_path() {
    let _mock = init_mock();

    for relpath in ["", "km", "kmmx", "KMM", "kmm/", "kmm/x", "/kmm", "meminfo"] {
        let mut file = OpenFile::new(OpenFlags::O_RDONLY);
        let result = KMM_OPERATIONS.open(&mut file, relpath, OpenFlags::O_RDONLY, FileMode::empty());
        assert_eq!(result, Err(FsError::NotFound), "relpath {:?}", relpath);
        assert!(!file.has_private());
    }
}

#[test]
fn test_kmm_permission_checked_before_path() {
    let _mock = init_mock();
    let mut file = OpenFile::new(OpenFlags::O_WRONLY);

    let result = KMM_OPERATIONS.open(&mut file, "nope", OpenFlags::O_WRONLY, FileMode::empty());
    assert_eq!(result, Err(FsError::PermissionDenied));
}

#[test]
fn test_kmm_close_releases_private() {
    let _mock = init_mock();
    let mut file = OpenFile::new(OpenFlags::O_RDONLY);
    KMM_OPERATIONS
        .open(&mut file, KMM_NAME, OpenFlags::O_RDONLY, FileMode::empty())
        .unwrap();

    assert_eq!(KMM_OPERATIONS.close(&mut file), Ok(()));
    assert!(!file.has_private());

    // 再次关闭属于调用者违约
    assert_eq!(KMM_OPERATIONS.close(&mut file), Err(FsError::BadFileDescriptor));
}

#[test]
fn test_kmm_close_keeps_foreign_private() {
    let _mock = init_mock();
    let mut file = OpenFile::new(OpenFlags::O_RDONLY);
    file.attach_private(Box::new(7u32));

    assert_eq!(KMM_OPERATIONS.close(&mut file), Err(FsError::BadFileDescriptor));
    assert!(file.has_private());
    assert_eq!(file.private_ref::<u32>(), Some(&7));
}

#[test]
fn test_kmm_read_without_open() {
    let _mock = init_mock();
    let mut file = OpenFile::new(OpenFlags::O_RDONLY);
    let mut buf = [0u8; 16];

    assert_eq!(
        KMM_OPERATIONS.read(&mut file, &mut buf),
        Err(FsError::BadFileDescriptor)
    );
    assert_eq!(file.pos(), 0);
}

#[test]
fn test_kmm_stat() {
    let mock = init_mock();

    let stat = KMM_OPERATIONS.stat(KMM_NAME).unwrap();
    let mode = FileMode::from_bits_truncate(stat.st_mode);
    assert!(mode.is_regular());
    assert_eq!(mode.permissions(), 0o444); // r--r--r--
    assert_eq!(stat.st_size, 0);
    assert_eq!(stat.st_blksize, 0);
    assert_eq!(stat.st_blocks, 0);

    // stat 不生成内容
    assert_eq!(mock.mallinfo_queries(), 0);
}

#[test]
fn test_kmm_stat_wrong_path() {
    let _mock = init_mock();

    for relpath in ["", "kmmx", "kmm/x", "proc"] {
        assert_eq!(KMM_OPERATIONS.stat(relpath), Err(FsError::NotFound));
    }
}

#[test]
fn test_kmm_unsupported_operations() {
    let _mock = init_mock();
    let procfs = create_test_procfs();
    let mut handle = open_kmm(&procfs);

    assert_eq!(handle.write(b"x"), Err(FsError::NotSupported));
    assert_eq!(handle.pos(), 0);

    assert_eq!(KMM_OPERATIONS.opendir(KMM_NAME), Err(FsError::NotSupported));
    assert_eq!(KMM_OPERATIONS.readdir(), Err(FsError::NotSupported));
    assert_eq!(KMM_OPERATIONS.rewinddir(), Err(FsError::NotSupported));
    assert_eq!(KMM_OPERATIONS.closedir(), Err(FsError::NotSupported));

    handle.close().unwrap();
}
