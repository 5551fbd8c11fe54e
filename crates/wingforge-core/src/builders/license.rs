//! License builder: the fixed MIT grant, parameterized by the workspace's
//! copyright owner and period.

use crate::domain::{ArtifactContent, GeneratedArtifact, SubLibrary, WritePolicy};

pub fn build(lib: &SubLibrary<'_>) -> GeneratedArtifact {
    let ws = lib.workspace();

    let lines = vec![
        "MIT License".to_string(),
        String::new(),
        format!(
            "Copyright (c) {} {}",
            ws.copyright_period(),
            ws.copyright_owner()
        ),
        String::new(),
        "Permission is hereby granted, free of charge, to any person obtaining a copy".into(),
        "of this software and associated documentation files (the \"Software\"), to deal".into(),
        "in the Software without restriction, including without limitation the rights".into(),
        "to use, copy, modify, merge, publish, distribute, sublicense, and/or sell".into(),
        "copies of the Software, and to permit persons to whom the Software is".into(),
        "furnished to do so, subject to the following conditions:".into(),
        String::new(),
        "The above copyright notice and this permission notice shall be included in all".into(),
        "copies or substantial portions of the Software.".into(),
        String::new(),
        "THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR".into(),
        "IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,".into(),
        "FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE".into(),
        "AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER".into(),
        "LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,".into(),
        "OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE".into(),
        "SOFTWARE.".into(),
    ];

    GeneratedArtifact::new("LICENSE", ArtifactContent::Lines(lines), WritePolicy::Always)
}
