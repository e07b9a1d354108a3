//! Prompt text sent to the model.

use super::word_count::WordRange;

/// Builds the instructional prompt for one section.
pub trait PromptTemplate: Send + Sync {
    fn render(&self, title: &str, target: WordRange, info: Option<&str>) -> String;
}

/// Course listing with five labelled subsections and a keyword list, in Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseSectionTemplate;

impl PromptTemplate for CourseSectionTemplate {
    fn render(&self, title: &str, target: WordRange, info: Option<&str>) -> String {
        let info = info.unwrap_or_default();
        let words = target.max;

        format!(
            "you are expert in AI online course assistant,
Write a detailed section titled '{title}' with approximately {words} words. Ensure the content is well-organized, informative, and consists of complete sentences. Avoid incomplete sentences.

{info}

The structure of your response should include the following:

1) **Title of the course**: Provide the course title

2) **Requirements or prerequisites**: Provide any requirements or prerequisites needed to join the course

3) **Description**: Provide a detailed description of the course, including its objectives, target audience, and breakdown of its modules

4) **What you'll learn**: Provide a comprehensive list of what students will learn from the course

5) **Who this course is for**: Provide information about the target audience for the course

**Keywords**:
[List relevant keywords for the course]

Remember, the goal is to create a comprehensive and self-contained learning resource with the level of detail and instructional quality that one would expect from an expert instructor. Your output should be formatted using Markdown for clarity and easy integration into course platforms.
"
        )
    }
}

/// Prepend caller-supplied prefixes, one per line, as a leading block.
pub fn with_prefixes(prompt: String, prefixes: &[String]) -> String {
    if prefixes.is_empty() {
        return prompt;
    }
    format!("{}\n\n{prompt}", prefixes.join("\n"))
}

pub fn completion_prompt(text: &str) -> String {
    format!("Complete the following text to ensure it ends with a complete sentence: {text}")
}

pub fn summarize_prompt(text: &str, max_words: usize) -> String {
    format!("Summarize the following text to fit within {max_words} words: {text}")
}

pub fn expand_prompt(text: &str, additional_words: usize) -> String {
    format!(
        "Expand the following text by adding approximately {additional_words} words, ensuring it consists of complete sentences: {text}"
    )
}
