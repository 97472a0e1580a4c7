#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

peg::parser! {
    /// Grammar for one CSV record (a single line; embedded newlines in
    /// quoted fields are not supported).
    pub grammar csv() for str {
        /// matches a doubled quote inside a quoted field
        rule escaped_quote() -> char
            = "\"\"" { '"' }

        /// matches one character of a quoted field
        rule quoted_char() -> char
            = escaped_quote()
            / c:[^ '"'] { c }

        /// matches a quoted field and returns its unescaped content
        rule quoted_field() -> String
            = "\"" chars:quoted_char()* "\"" { chars.into_iter().collect() }

        /// matches an unquoted field
        rule bare_field() -> String
            = chars:$([^ ',' | '"']*) { chars.to_string() }

        /// matches one field, quoted or bare
        rule field() -> String
            = quoted_field()
            / bare_field()

        /// parses one CSV record into its fields
        pub rule record() -> Vec<String>
            = fields:(field() ** ",") { fields }
    }
}
