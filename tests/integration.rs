//! Integration tests for pulp


use harness::{TestRepo, content_headers, run_pulp, split_sections};
use pulp::{IGNORED_DIRS, IGNORED_FILES};

#[test]
fn test_basic_snapshot() {
    let repo = TestRepo::new();
    repo.add_file("main.rs", "fn main() {}\n");
    repo.add_file("lib.rs", "pub mod foo;\n");

    let (stdout, _stderr, success) = run_pulp(repo.path());
    assert!(success, "pulp should succeed");
    assert!(stdout.contains("full_codebase.txt"), "should name the artifact: {}", stdout);

    let snapshot = repo.read_snapshot();
    assert!(snapshot.starts_with("PROJECT STRUCTURE:\n./\n"));
    assert!(snapshot.contains("    main.rs\n"));
    assert!(snapshot.contains("--- FILE: ./main.rs ---\n\nfn main() {}\n"));
    assert!(snapshot.contains("--- FILE: ./lib.rs ---\n\npub mod foo;\n"));
}

#[test]
fn test_ignored_build_dir_scenario() {
    let repo = TestRepo::new();
    repo.add_file("src/main.py", "print('hello')\n");
    repo.add_file("build/out.bin", "binary junk");
    repo.add_file("notes.md", "# Notes\n");

    let (_stdout, _stderr, success) = run_pulp(repo.path());
    assert!(success);

    let snapshot = repo.read_snapshot();
    let (structure, content) = split_sections(&snapshot);

    assert_eq!(
        structure,
        "PROJECT STRUCTURE:\n./\n    notes.md\n    src/\n        main.py\n\n\n"
    );
    assert!(!snapshot.contains("build"), "pruned dir leaked: {}", snapshot);
    assert_eq!(content_headers(content), vec!["./notes.md", "./src/main.py"]);
    assert!(content.contains("--- FILE: ./notes.md ---\n\n# Notes\n"));
    assert!(content.ends_with("--- FILE: ./src/main.py ---\n\nprint('hello')\n"));
}

#[test]
fn test_exact_artifact_bytes() {
    let repo = TestRepo::new();
    repo.add_file("Dockerfile", "FROM alpine\n");
    repo.add_file("web/app.tsx", "export {};\n");
    repo.add_file("web/logo.png", "png");

    let (_stdout, _stderr, success) = run_pulp(repo.path());
    assert!(success);

    let expected = format!(
        "PROJECT STRUCTURE:\n./\n    Dockerfile\n    web/\n        app.tsx\n        logo.png\n\n\n{}\n\n\
         \n\n--- FILE: ./Dockerfile ---\n\nFROM alpine\n\
         \n\n--- FILE: ./web/app.tsx ---\n\nexport {{}};\n",
        "=".repeat(50)
    );
    assert_eq!(repo.read_snapshot(), expected);
}

#[test]
fn test_ignored_dirs_pruned_at_every_depth() {
    let repo = TestRepo::new();
    repo.add_file("keep.js", "1");
    for name in IGNORED_DIRS {
        repo.add_file(&format!("{name}/top.js"), "top");
        repo.add_file(&format!("pkg/deep/{name}/nested.js"), "nested");
    }

    let (_stdout, _stderr, success) = run_pulp(repo.path());
    assert!(success);

    let snapshot = repo.read_snapshot();
    let (structure, content) = split_sections(&snapshot);
    for name in IGNORED_DIRS {
        assert!(
            !structure.lines().any(|l| l.trim() == format!("{name}/")),
            "{name} should be pruned: {structure}"
        );
        for path in content_headers(content) {
            assert!(!path.split('/').any(|seg| seg == *name), "{path} under {name}");
        }
    }
    assert!(!snapshot.contains("nested.js"));
    assert!(!snapshot.contains("top.js"));
    assert!(content_headers(content).contains(&"./keep.js"));
}

#[test]
fn test_ignored_files_never_listed() {
    let repo = TestRepo::new();
    repo.add_file("package.json", "{}");
    for name in IGNORED_FILES {
        repo.add_file(name, "ignored");
        repo.add_file(&format!("sub/{name}"), "ignored");
    }

    let (_stdout, _stderr, success) = run_pulp(repo.path());
    assert!(success);

    let snapshot = repo.read_snapshot();
    let (structure, content) = split_sections(&snapshot);
    for name in IGNORED_FILES {
        assert!(
            !structure.lines().any(|l| l.trim() == *name),
            "{name} should not be listed: {structure}"
        );
        assert!(
            !content_headers(content)
                .iter()
                .any(|p| p.rsplit('/').next() == Some(*name)),
            "{name} should have no content header"
        );
    }
    assert!(structure.contains("    package.json\n"));
}

#[test]
fn test_every_content_header_is_listed() {
    let repo = TestRepo::new();
    repo.add_file("a/b/c.ts", "c");
    repo.add_file("a/d.css", "d");
    repo.add_file("e.html", "e");
    repo.add_file("f.bin", "f");

    let (_stdout, _stderr, success) = run_pulp(repo.path());
    assert!(success);

    let snapshot = repo.read_snapshot();
    let (structure, content) = split_sections(&snapshot);
    let listed: Vec<&str> = structure.lines().map(str::trim).collect();
    let headers = content_headers(content);
    assert_eq!(headers, vec!["./a/b/c.ts", "./a/d.css", "./e.html"]);
    for path in headers {
        let name = path.rsplit('/').next().unwrap();
        assert!(listed.contains(&name), "{name} missing from structure");
    }
    assert!(listed.contains(&"f.bin"), "non-included files are still listed");
}

#[test]
fn test_content_is_verbatim() {
    let repo = TestRepo::new();
    let body = "line one\r\n\ttabbed\n\nunicode: héllo 日本\nno trailing newline";
    repo.add_file("doc.md", body);

    let (_stdout, _stderr, success) = run_pulp(repo.path());
    assert!(success);
    assert!(repo.read_snapshot().ends_with(&format!("--- FILE: ./doc.md ---\n\n{body}")));
}

#[test]
fn test_empty_dir_listed() {
    let repo = TestRepo::new();
    repo.add_dir("empty");
    repo.add_file("only_ignored/yarn.lock", "x");

    let (_stdout, _stderr, success) = run_pulp(repo.path());
    assert!(success);

    let snapshot = repo.read_snapshot();
    assert!(snapshot.contains("    empty/\n"));
    assert!(snapshot.contains("    only_ignored/\n"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let repo = TestRepo::new();
    repo.add_file("z.py", "z");
    repo.add_file("m/n.py", "n");
    repo.add_file("a.py", "a");

    assert!(run_pulp(repo.path()).2);
    let first = repo.read_snapshot();
    assert!(run_pulp(repo.path()).2);
    let second = repo.read_snapshot();

    assert_eq!(first, second);
    assert!(!second.contains("full_codebase.txt"), "artifact must not list itself");
}
