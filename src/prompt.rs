/// Reply returned when the text selected for summarization is empty; no
/// model call is made in that case.
pub const EMPTY_TEXT_APOLOGY: &str = "I'm sorry but I can't summarize an empty text";

/// Build the fixed cleaning instruction for the sanitization node.
///
/// The model is told to strip markup and return only the cleaned text; the
/// reply is used verbatim, with no local post-validation.
pub fn sanitize_prompt(text: &str) -> String {
    format!(
        "You are a text sanitization assistant.\n\
        Your task is to clean the following text by:\n\
        - Removing all HTML tags (e.g. <div>, <p>, <br>, etc.)\n\
        - Removing HTML entities (e.g. &amp;, &nbsp;, &#39;, etc.)\n\
        - Removing any code snippets, scripts, or markup language\n\
        - Removing URLs and file paths\n\
        - Keeping only natural readable text with standard punctuation (letters, digits, spaces, and: . , ! ? ' \" : ; - ( ))\n\
        - Preserving the original meaning and sentence structure\n\
        - Do NOT summarize or rephrase — only clean the text\n\
        \n\
        Return ONLY the cleaned text, with no explanation or commentary.\n\
        \n\
        Text to sanitize:\n\
        {text}"
    )
}

/// Build the fixed compression instruction for the summarization node.
pub fn summarize_prompt(text: &str) -> String {
    format!(
        "You are a summarization assistant. Your task is to compress the text below into the shortest possible statement that captures its single core idea.\n\
        \n\
        Rules:\n\
        - Output 4 sentences for short inputs, 8 sentences maximum for long ones — never more\n\
        - DO NOT restate every point; identify the one thing the text is really saying\n\
        - DO NOT paraphrase sentence by sentence — that is not a summary\n\
        - No filler openers like \"The text discusses...\" or \"The author states...\"\n\
        - If the input is already short and focused, your summary must be noticeably shorter than the input\n\
        - Output only the summary, nothing else\n\
        \n\
        Text:\n\
        {text}"
    )
}
