use crate::filemap::FileMap;
use indoc::indoc;

pub fn file_map(items: &[(&str, &str)]) -> FileMap {
    items
        .iter()
        .map(|(name, content)| (name.to_string(), content.to_string()))
        .collect()
}

/*
fixture
├── hello.txt
├── nested
│   └── deeper.txt
└── settings.conf
*/
pub fn fixture_map() -> FileMap {
    file_map(&[
        ("hello.txt", "Hello, world!\n"),
        ("settings.conf", "name = dirjson\nverbose = false\n"),
    ])
}

pub fn fixture_document() -> &'static str {
    indoc! {r#"
    {
        "hello.txt": "Hello, world!\n",
        "settings.conf": "name = dirjson\nverbose = false\n"
    }"#}
}
