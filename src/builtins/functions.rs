//! Static builtin vocabulary tables
//!
//! The language's predefined vocabulary: system variables (including the
//! `sqlca` program register), system constants, and three function families
//! (general system functions, array methods, string methods). Doc strings
//! are shown verbatim by hover and signature help.

/// One parameter of a builtin function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinParam {
    pub name: &'static str,
    pub doc: &'static str,
    pub ty: &'static str,
}

/// A builtin function entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub params: &'static [BuiltinParam],
    pub returns: &'static [&'static str],
    pub doc: &'static str,
}

impl BuiltinFunction {
    /// `name(param, ...) RETURNS type, ...` display form.
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(", ");
        if self.returns.is_empty() {
            format!("{}({params})", self.name)
        } else {
            format!("{}({params}) RETURNS {}", self.name, self.returns.join(", "))
        }
    }
}

/// A named sub-field of a program register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterField {
    pub name: &'static str,
    pub ty: &'static str,
    pub doc: &'static str,
}

/// A predefined system variable, optionally a structured program register
/// with named sub-fields (`sqlca.sqlcode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemVariable {
    pub name: &'static str,
    pub ty: &'static str,
    pub doc: &'static str,
    pub fields: &'static [RegisterField],
}

impl SystemVariable {
    pub fn field(&self, name: &str) -> Option<&'static RegisterField> {
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }
}

/// A predefined system constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConstant {
    pub name: &'static str,
    pub value: &'static str,
    pub doc: &'static str,
}

pub(crate) const SYSTEM_VARIABLES: &[SystemVariable] = &[
    SystemVariable {
        name: "status",
        ty: "INTEGER",
        doc: "Execution status of the last statement; zero on success, a negative error code on failure.",
        fields: &[],
    },
    SystemVariable {
        name: "int_flag",
        ty: "INTEGER",
        doc: "Set to a nonzero value when the user presses the interrupt key.",
        fields: &[],
    },
    SystemVariable {
        name: "quit_flag",
        ty: "INTEGER",
        doc: "Set to a nonzero value when the user presses the quit key.",
        fields: &[],
    },
    SystemVariable {
        name: "sqlca",
        ty: "RECORD",
        doc: "SQL communication area: result information for the most recent SQL statement.",
        fields: &[
            RegisterField {
                name: "sqlcode",
                ty: "INTEGER",
                doc: "SQL status code of the last statement; zero on success, NOTFOUND when no row matched.",
            },
            RegisterField {
                name: "sqlerrm",
                ty: "CHAR(71)",
                doc: "Error message text supplied by the database server.",
            },
            RegisterField {
                name: "sqlerrp",
                ty: "CHAR(8)",
                doc: "Internal identification of the database server module that raised the error.",
            },
            RegisterField {
                name: "sqlerrd",
                ty: "ARRAY[6] OF INTEGER",
                doc: "Diagnostic values: estimated cost, serial value, rows processed, error offset, rowid.",
            },
            RegisterField {
                name: "sqlawarn",
                ty: "CHAR(8)",
                doc: "Warning flags raised by the last SQL statement.",
            },
        ],
    },
];

pub(crate) const SYSTEM_CONSTANTS: &[SystemConstant] = &[
    SystemConstant {
        name: "notfound",
        value: "100",
        doc: "SQL status value indicating that no row matched the query.",
    },
    SystemConstant {
        name: "true",
        value: "1",
        doc: "Boolean true.",
    },
    SystemConstant {
        name: "false",
        value: "0",
        doc: "Boolean false.",
    },
    SystemConstant {
        name: "null",
        value: "NULL",
        doc: "The null value; use IS NULL / IS NOT NULL to test for it.",
    },
];

pub(crate) const SYSTEM_FUNCTIONS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "length",
        params: &[BuiltinParam {
            name: "source",
            doc: "The character expression to measure.",
            ty: "STRING",
        }],
        returns: &["INTEGER"],
        doc: "Returns the number of characters in the given string, not counting trailing blanks.",
    },
    BuiltinFunction {
        name: "arg_count",
        params: &[],
        returns: &["INTEGER"],
        doc: "Returns the number of command-line arguments passed to the program.",
    },
    BuiltinFunction {
        name: "arg_val",
        params: &[BuiltinParam {
            name: "position",
            doc: "One-based index of the argument.",
            ty: "INTEGER",
        }],
        returns: &["STRING"],
        doc: "Returns the command-line argument at the given position.",
    },
    BuiltinFunction {
        name: "upshift",
        params: &[BuiltinParam {
            name: "source",
            doc: "The string to convert.",
            ty: "STRING",
        }],
        returns: &["STRING"],
        doc: "Returns the given string with all letters converted to uppercase.",
    },
    BuiltinFunction {
        name: "downshift",
        params: &[BuiltinParam {
            name: "source",
            doc: "The string to convert.",
            ty: "STRING",
        }],
        returns: &["STRING"],
        doc: "Returns the given string with all letters converted to lowercase.",
    },
    BuiltinFunction {
        name: "today",
        params: &[],
        returns: &["DATE"],
        doc: "Returns the current calendar date of the client machine.",
    },
    BuiltinFunction {
        name: "time",
        params: &[],
        returns: &["CHAR(8)"],
        doc: "Returns the current time of day as hh:mm:ss.",
    },
    BuiltinFunction {
        name: "date",
        params: &[BuiltinParam {
            name: "expression",
            doc: "A string, integer, or datetime expression to convert.",
            ty: "STRING",
        }],
        returns: &["DATE"],
        doc: "Converts the given expression to a DATE value.",
    },
    BuiltinFunction {
        name: "err_get",
        params: &[BuiltinParam {
            name: "code",
            doc: "The runtime error number.",
            ty: "INTEGER",
        }],
        returns: &["STRING"],
        doc: "Returns the message text associated with the given error number.",
    },
    BuiltinFunction {
        name: "err_print",
        params: &[BuiltinParam {
            name: "code",
            doc: "The runtime error number.",
            ty: "INTEGER",
        }],
        returns: &[],
        doc: "Displays the message text for the given error number in the error line.",
    },
    BuiltinFunction {
        name: "err_quit",
        params: &[BuiltinParam {
            name: "code",
            doc: "The runtime error number.",
            ty: "INTEGER",
        }],
        returns: &[],
        doc: "Displays the message text for the given error number and terminates the program.",
    },
    BuiltinFunction {
        name: "num_args",
        params: &[],
        returns: &["INTEGER"],
        doc: "Returns the number of arguments the current function was called with.",
    },
    BuiltinFunction {
        name: "infield",
        params: &[BuiltinParam {
            name: "field",
            doc: "A screen field name.",
            ty: "STRING",
        }],
        returns: &["INTEGER"],
        doc: "Returns true when the cursor is in the given screen field.",
    },
    BuiltinFunction {
        name: "ascii",
        params: &[BuiltinParam {
            name: "code",
            doc: "A character code.",
            ty: "INTEGER",
        }],
        returns: &["CHAR(1)"],
        doc: "Returns the character for the given ASCII code.",
    },
];

pub(crate) const ARRAY_FUNCTIONS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "appendElement",
        params: &[],
        returns: &[],
        doc: "Appends a new element at the end of the array.",
    },
    BuiltinFunction {
        name: "deleteElement",
        params: &[BuiltinParam {
            name: "position",
            doc: "One-based index of the element to remove.",
            ty: "INTEGER",
        }],
        returns: &[],
        doc: "Removes the element at the given position, shifting later elements down.",
    },
    BuiltinFunction {
        name: "insertElement",
        params: &[BuiltinParam {
            name: "position",
            doc: "One-based index at which to insert.",
            ty: "INTEGER",
        }],
        returns: &[],
        doc: "Inserts a new element at the given position, shifting later elements up.",
    },
    BuiltinFunction {
        name: "getLength",
        params: &[],
        returns: &["INTEGER"],
        doc: "Returns the number of elements in the array.",
    },
    BuiltinFunction {
        name: "clear",
        params: &[],
        returns: &[],
        doc: "Removes all elements from the array.",
    },
    BuiltinFunction {
        name: "sort",
        params: &[
            BuiltinParam {
                name: "field",
                doc: "Record field to sort by, or an empty string for scalar arrays.",
                ty: "STRING",
            },
            BuiltinParam {
                name: "reverse",
                doc: "TRUE for descending order.",
                ty: "BOOLEAN",
            },
        ],
        returns: &[],
        doc: "Sorts the elements of the array.",
    },
    BuiltinFunction {
        name: "search",
        params: &[
            BuiltinParam {
                name: "field",
                doc: "Record field to compare, or an empty string for scalar arrays.",
                ty: "STRING",
            },
            BuiltinParam {
                name: "value",
                doc: "The value to search for.",
                ty: "STRING",
            },
        ],
        returns: &["INTEGER"],
        doc: "Returns the one-based index of the first matching element, or zero when not found.",
    },
];

pub(crate) const STRING_FUNCTIONS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "subString",
        params: &[
            BuiltinParam {
                name: "start",
                doc: "One-based index of the first character.",
                ty: "INTEGER",
            },
            BuiltinParam {
                name: "end",
                doc: "One-based index of the last character.",
                ty: "INTEGER",
            },
        ],
        returns: &["STRING"],
        doc: "Returns the substring between the given positions, inclusive.",
    },
    BuiltinFunction {
        name: "toUpperCase",
        params: &[],
        returns: &["STRING"],
        doc: "Returns the string with all letters converted to uppercase.",
    },
    BuiltinFunction {
        name: "toLowerCase",
        params: &[],
        returns: &["STRING"],
        doc: "Returns the string with all letters converted to lowercase.",
    },
    BuiltinFunction {
        name: "trim",
        params: &[],
        returns: &["STRING"],
        doc: "Returns the string with leading and trailing blanks removed.",
    },
    BuiltinFunction {
        name: "trimLeft",
        params: &[],
        returns: &["STRING"],
        doc: "Returns the string with leading blanks removed.",
    },
    BuiltinFunction {
        name: "trimRight",
        params: &[],
        returns: &["STRING"],
        doc: "Returns the string with trailing blanks removed.",
    },
    BuiltinFunction {
        name: "getCharAt",
        params: &[BuiltinParam {
            name: "position",
            doc: "One-based character index.",
            ty: "INTEGER",
        }],
        returns: &["STRING"],
        doc: "Returns the character at the given position, or NULL when out of range.",
    },
    BuiltinFunction {
        name: "getIndexOf",
        params: &[
            BuiltinParam {
                name: "needle",
                doc: "The substring to find.",
                ty: "STRING",
            },
            BuiltinParam {
                name: "start",
                doc: "One-based position to start searching from.",
                ty: "INTEGER",
            },
        ],
        returns: &["INTEGER"],
        doc: "Returns the one-based position of the substring, or zero when not found.",
    },
    BuiltinFunction {
        name: "getLength",
        params: &[],
        returns: &["INTEGER"],
        doc: "Returns the number of characters in the string, counting trailing blanks.",
    },
    BuiltinFunction {
        name: "append",
        params: &[BuiltinParam {
            name: "suffix",
            doc: "The string to append.",
            ty: "STRING",
        }],
        returns: &["STRING"],
        doc: "Returns a new string with the given suffix appended.",
    },
    BuiltinFunction {
        name: "equals",
        params: &[BuiltinParam {
            name: "other",
            doc: "The string to compare against.",
            ty: "STRING",
        }],
        returns: &["BOOLEAN"],
        doc: "Returns TRUE when both strings are exactly equal.",
    },
    BuiltinFunction {
        name: "equalsIgnoreCase",
        params: &[BuiltinParam {
            name: "other",
            doc: "The string to compare against.",
            ty: "STRING",
        }],
        returns: &["BOOLEAN"],
        doc: "Returns TRUE when both strings are equal ignoring letter case.",
    },
];
