/// Build the user turn for a review request.
///
/// Language, code and context are embedded verbatim; only surrounding
/// whitespace of the context is trimmed.
pub fn build_user_prompt(language: &str, code: &str, extra_context: &str) -> String {
    let context = extra_context.trim();

    format!(
        "Language: {language}\n\
         \n\
         Extra context (may be empty):\n\
         {context}\n\
         \n\
         Code:\n\
         ```{language}\n\
         {code}\n\
         ```\n"
    )
}
