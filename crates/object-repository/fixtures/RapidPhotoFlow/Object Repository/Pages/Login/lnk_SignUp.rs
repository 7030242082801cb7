<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Sign Up link on login page</description>
   <name>lnk_SignUp</name>
   <tag></tag>
   <elementGuidId>login-signup-link</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//a[contains(text(), 'Sign up')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>a[href*='signup']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
