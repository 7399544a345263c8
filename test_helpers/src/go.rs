//! Annotated Go source fixtures.
//!
//! Each constant is a complete Go file exercising one area of generation.

/// Read-only, read-write and privately settable fields, one with validation.
pub const USER: &str = r#"package advanced

import (
	"github.com/go-playground/validator/v10"
	"github.com/pkg/errors"
)

type User struct {
	id    int    `property:"get"`                                       // Read-only ID field
	name  string `property:"get,set"`                                   // Name with both getter and setter
	email string `property:"get,set=private" validate:"required,email"` // Email with private setter and validation
}

var _validator = validator.New()

func validateFieldValue(name string, v any, tag string) error {
	if err := _validator.Var(v, tag); err != nil {
		return errors.Wrapf(err, "validation failed for field '%s'", name)
	}
	return nil
}
"#;

/// Validated fields mixed with a getter-only and an untagged field.
pub const ACCOUNT: &str = r#"package example

type Account struct {
	id       int    `property:"get"`
	username string `property:"get,set" validate:"required,min=3,max=20"`
	password string `property:"set=private" validate:"required,min=8"`
	note     string
}
"#;

/// Initialism-bearing field names and an imported field type.
pub const API_CLIENT: &str = r#"package example

import (
	"fmt"
	"net/http"
)

type APIClient struct {
	client http.Client `property:"get,set=private"` // HTTP client
	url    string      `property:"get,set=private"` // URL field (initialism)
	apiKey string      `property:"get,set=private"` // API key field (initialism)
}

func (c *APIClient) String() string {
	return fmt.Sprintf("%s", c.url)
}
"#;

/// Every declaration shape the generator must skip, next to a struct with a
/// wide range of field types.
pub const MIXED: &str = r#"package data

import (
	"fmt"
	"go/ast"
	"regexp"
)

type SuccessStruct struct {
	ignored1 int
	ignored2 int `property:""`
	ignored3 int `property:"-"`

	int1 int  `property:"get,set"`
	int2 *int `property:"get,set"`

	interface1 interface{} `property:"get"`

	astFile1 ast.File  `property:"get"`
	astFile2 *ast.File `property:"get,set"`

	api         string `property:"get"`
	apiEndpoint string `property:"get"`
}

type EmptyStruct struct{}

type String string

type Pair[T any] struct {
	left T `property:"get"`
}

func Func() {
	type IgnoredInnerStruct struct {
		Int1 int `property:"get"`
	}

	fmt.Println("Hello, world")
}

const IgnoredConst = 1

var IgnoredVar = regexp.MustCompile(`^$`)

var IgnoredAnonymousStruct = struct {
	Int1 int `property:"get"`
}{
	Int1: 1,
}
"#;

/// A property tag with an unknown directive.
pub const INVALID_DIRECTIVE: &str = r#"package broken

type Valid struct {
	id int `property:"get"`
}

type Broken struct {
	name string `property:"get,foo"`
}
"#;

/// A double-quoted tag whose escape sequence is not valid Go.
pub const MALFORMED_TAG: &str = r#"package broken

type Broken struct {
	name string "property:\q"
}
"#;

/// An embedded field whose property tag carries an unknown directive.
pub const EMBEDDED_INVALID_DIRECTIVE: &str = r#"package broken

type Base struct{}

type Wrapper struct {
	Base `property:"foo"`
}
"#;
