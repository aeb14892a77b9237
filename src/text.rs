//! Fixed text printed by the plugin.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const AUTHOR: &str = "ThePhD";

pub const REPOSITORY: &str = "https://github.com/ThePhD/embed";

pub const TITLE: &str = "embed, a Proposal Implementation";

pub const VERSION_TEXT: &str = concat!(
    "embed, a Proposal Implementation, ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Copyright (C) 2018 ThePhD\n",
    "This is free software; see the LICENSE for copying conditions. There is NO\n",
    "warranty; not even for MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE."
);

pub const LICENSE_TEXT: &str = "embed, a Proposal Implementation

\tThe MIT License (MIT)

\tCopyright (c) 2018 ThePhD

\tPermission is hereby granted, free of charge, to any person obtaining
a copy of this software and associated documentation files (the \"Software\"),
to deal in the Software without restriction, including without limitation the
rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
sell copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

\tThe above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.";

/// Option reference shown by the GCC plugin's `help` flag
pub const GCC_HELP_TEXT: &str = "embed, a Proposal Implementation
\tTo use, arguments must passed directly to the GCC invocation with the
format -fplugin-arg-PLUGIN_NAME-OPTION_NAME[=VALUE], like so:
\t-fplugin-arg-libembed_gcc-local=false

The following OPTION_NAMEs/VALUEs options/flags are valid:

-h
-help
\t| Display this help and do not initialize plugin.
-i
-info
\t| Displays license and plugin information and
\t| do not initialize plugin.
-v
-verbose
\t| Display (noisy) diagnostics information
-l[=true]
-local[=true]
\t| true/false, default true
\t| Whether or not to search the path local to the file.
-p=path/spec/1[;path/spec/2;...]
-path=path/spec/1[;path/spec/2;...]
\t| path specification, 1 or more.
\t| Semi-colon (';') delimited list of paths, local
\t| or absolute. Multiple path arguments add to the list.
";

/// Help for hosts that only have a stub integration
pub const GENERIC_HELP_TEXT: &str = TITLE;
