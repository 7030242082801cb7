<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Confirm Password input field on signup page</description>
   <name>txt_ConfirmPassword</name>
   <tag></tag>
   <elementGuidId>signup-confirm-password-input</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//input[@type='password' and @placeholder='Confirm Password']</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>input[type='password'][placeholder='Confirm Password']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
